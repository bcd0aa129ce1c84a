//! Documentation text acquisition.
//!
//! The canonical hosted page is tried once; on any network failure the
//! bundled Markdown copy is read instead, and a missing copy yields empty
//! text. Nothing here retries or writes to disk.

pub mod local;
pub mod online;

use reqwest::Client;
use std::sync::Arc;

use crate::config::MetaConfig;
use crate::errors::{DocError, DocResult};
use crate::markdown_converter::MarkdownConverter;

pub use online::{FetchedPage, is_html_content_type};

/// Where acquired text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocOrigin {
    Online,
    Local,
    /// Neither source produced anything
    Missing,
}

/// Acquired document text plus its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredDoc {
    pub text: String,
    pub origin: DocOrigin,
}

impl AcquiredDoc {
    fn missing() -> Self {
        Self {
            text: String::new(),
            origin: DocOrigin::Missing,
        }
    }
}

/// Fetches canonical pages and reads local copies for one configuration.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct ContentAcquirer {
    client: Client,
    config: Arc<MetaConfig>,
    converter: MarkdownConverter,
}

impl ContentAcquirer {
    /// # Errors
    ///
    /// `DocError::Config` if the HTTP client cannot be built.
    pub fn new(config: MetaConfig) -> DocResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| DocError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, config))
    }

    /// Use an existing client (shared pool, custom proxy, ...)
    #[must_use]
    pub fn with_client(client: Client, config: MetaConfig) -> Self {
        let converter = MarkdownConverter::from_config(&config);
        Self {
            client,
            config: Arc::new(config),
            converter,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MetaConfig {
        &self.config
    }

    /// Fetch `<doc_host>/component/<name>.html` and return Markdown.
    ///
    /// HTML payloads are reduced to their content region and converted;
    /// anything else is returned as-is.
    ///
    /// # Errors
    ///
    /// Any network failure (see [`DocError::is_network_failure`]) or a
    /// `Conversion` error.
    pub async fn fetch_online(&self, name: &str) -> DocResult<String> {
        let url = self.config.doc_url(name);
        tracing::debug!(component = name, url = %url, "Fetching documentation page");

        let page = online::fetch_page(
            &self.client,
            &url,
            self.config.network_timeout(),
            self.config.user_agent(),
        )
        .await?;

        if !page.is_html {
            return Ok(page.body);
        }

        let markdown = self.converter.convert(&page.body).await?;
        tracing::debug!(
            component = name,
            html_bytes = page.body.len(),
            markdown_bytes = markdown.len(),
            "Converted documentation page"
        );
        Ok(markdown)
    }

    /// Read `<docs_dir>/<name>.md`.
    ///
    /// # Errors
    ///
    /// `NotFound` when the file is absent, `Io` for other read failures.
    pub async fn read_local(&self, name: &str) -> DocResult<String> {
        local::read_doc(&self.config.local_doc_path(name)).await
    }

    /// Blocking variant of [`read_local`](Self::read_local).
    ///
    /// # Errors
    ///
    /// Same as [`read_local`](Self::read_local).
    pub fn read_local_sync(&self, name: &str) -> DocResult<String> {
        local::read_doc_sync(&self.config.local_doc_path(name))
    }

    /// Online first, local copy on network failure, empty text otherwise.
    pub async fn acquire(&self, name: &str) -> AcquiredDoc {
        match self.fetch_online(name).await {
            Ok(text) => {
                return AcquiredDoc {
                    text,
                    origin: DocOrigin::Online,
                };
            }
            Err(e) => {
                tracing::warn!(component = name, error = %e, "Online documentation unavailable, using local copy");
            }
        }

        Self::local_or_missing(name, self.read_local(name).await)
    }

    /// Local copy only, never touches the network.
    pub fn acquire_local(&self, name: &str) -> AcquiredDoc {
        Self::local_or_missing(name, self.read_local_sync(name))
    }

    fn local_or_missing(name: &str, result: DocResult<String>) -> AcquiredDoc {
        match result {
            Ok(text) => AcquiredDoc {
                text,
                origin: DocOrigin::Local,
            },
            Err(e) => {
                tracing::warn!(component = name, error = %e, "Local documentation unavailable");
                AcquiredDoc::missing()
            }
        }
    }
}
