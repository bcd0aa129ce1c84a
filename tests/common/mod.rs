//! Test utilities and helper functions for the wotdoc_meta test suite

use anyhow::Result;
use mockito::{Mock, Server};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wotdoc_meta::{MetaConfig, SchemaLoader};

/// Path of a file under `tests/fixtures`
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of a file under `tests/fixtures`
#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("missing fixture {name}: {e}"))
}

/// Creates a temporary docs directory holding `<name>.md` files
#[allow(dead_code)]
pub fn create_docs_dir(docs: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (name, content) in docs {
        std::fs::write(dir.path().join(format!("{name}.md")), content)?;
    }
    Ok(dir)
}

/// Minimal documentation page in the hosted site's layout
#[allow(dead_code)]
pub fn create_doc_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
</head>
<body>
    <nav class="VPNav">导航</nav>
    <main class="main">
        <div class="vp-doc">
            <h1>{}</h1>
            {}
        </div>
    </main>
</body>
</html>"#,
        html_escape::encode_text(title),
        html_escape::encode_text(title),
        content
    )
}

/// Config pointing at a mock server and a local docs directory
#[allow(dead_code)]
pub fn test_config(doc_host: &str, docs_dir: &Path) -> MetaConfig {
    MetaConfig::builder()
        .doc_host(doc_host)
        .docs_dir(docs_dir)
        .network_timeout_ms(2_000)
        .build()
        .expect("test config is valid")
}

#[allow(dead_code)]
pub fn test_loader(doc_host: &str, docs_dir: &Path) -> SchemaLoader {
    SchemaLoader::new(test_config(doc_host, docs_dir)).expect("HTTP client builds")
}

/// Route of a component's canonical page
#[allow(dead_code)]
pub fn page_path(name: &str) -> String {
    format!("/component/{name}.html")
}

/// Creates a mock endpoint that returns HTML content, expected exactly once
#[allow(dead_code)]
pub fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .expect(1)
        .create()
}

/// Creates a mock endpoint that serves Markdown as-is
#[allow(dead_code)]
pub fn create_markdown_mock(server: &mut Server, path: &str, markdown: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/markdown; charset=utf-8")
        .with_body(markdown)
        .expect(1)
        .create()
}

/// Creates a mock endpoint that returns an error status, expected exactly once
#[allow(dead_code)]
pub fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("error")
        .expect(1)
        .create()
}

/// Address that accepts connections but never answers
#[allow(dead_code)]
pub async fn silent_host() -> Result<(String, tokio::task::JoinHandle<()>)> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    Ok((format!("http://{addr}"), handle))
}

/// Install a tracing subscriber once; honours `RUST_LOG`
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
