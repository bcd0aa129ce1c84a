//! End-to-end schema assembly

mod common;

use mockito::Server;
use wotdoc_meta::{ComponentMeta, PropType};

#[tokio::test]
async fn test_hosted_component_from_online_page() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = common::create_html_mock(
        &mut server,
        &common::page_path("button"),
        &common::fixture("button.html"),
    );
    let docs = common::create_docs_dir(&[])?;
    let loader = common::test_loader(&server.url(), docs.path());

    let meta = loader.load("button", None).await;

    assert_eq!(meta.name, "wd-button");
    let names: Vec<&str> = meta.props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["type", "round", "size", "icon"]);
    assert_eq!(
        meta.find_prop("type").and_then(|p| p.kind.values()).map(<[String]>::len),
        Some(5)
    );
    assert_eq!(meta.find_prop("round").map(|p| p.kind.clone()), Some(PropType::Boolean));
    assert_eq!(meta.events.len(), 2);
    assert_eq!(
        meta.find_event("getuserinfo").and_then(|e| e.version.as_deref()),
        Some("1.2.3")
    );
    assert!(meta.find_external_class("custom-class").is_some());
    assert!(meta.slots.is_none());
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_shared_document_uses_component_qualified_headings() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = common::create_error_mock(&mut server, &common::page_path("table"), 500);
    let docs = common::create_docs_dir(&[("table", common::fixture("table.md").as_str())])?;
    let loader = common::test_loader(&server.url(), docs.path());

    let col = loader.load("wd-table-col", Some("table")).await;

    assert_eq!(col.name, "wd-table-col");
    let names: Vec<&str> = col.props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["prop", "label", "width", "align"]);
    let slots = col.slots.as_deref().unwrap_or_default();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].name, "value");
    assert_eq!(col.documentation, common::fixture("table.md"));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_binding_aliases_and_data_structures() -> anyhow::Result<()> {
    let docs = common::create_docs_dir(&[
        ("input", common::fixture("input.md").as_str()),
        ("action-sheet", common::fixture("action-sheet.md").as_str()),
    ])?;
    let loader = common::test_loader("http://192.0.2.1", docs.path());

    let input = loader.load_local("input", None);
    for spelling in ["v-model", "modelValue", "model-value"] {
        let prop = input.find_prop(spelling).expect("binding spelling present");
        assert_eq!(prop.kind, PropType::String);
        assert_eq!(prop.raw_type, "string / number");
    }
    assert_eq!(input.props.iter().filter(|p| p.name == "model-value").count(), 1);

    let sheet = loader.load_local("action-sheet", None);
    let structures = sheet.data_structures.as_deref().unwrap_or_default();
    let names: Vec<&str> = structures.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Action 数据结构", "Panel数据结构"]);
    assert!(sheet.find_data_structure("Panel数据结构").is_some());
    assert!(sheet.external_classes.is_none());
    Ok(())
}

#[tokio::test]
async fn test_loading_is_idempotent() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let html = common::fixture("button.html");
    let mock = server
        .mock("GET", common::page_path("button").as_str())
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(&html)
        .expect(2)
        .create_async()
        .await;
    let docs = common::create_docs_dir(&[])?;
    let loader = common::test_loader(&server.url(), docs.path());

    let first = loader.load("button", None).await;
    let second = loader.load("button", None).await;

    assert_eq!(first, second);
    assert_eq!(first.to_json()?, second.to_json()?);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_online_only_failure_degrades() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = common::create_error_mock(&mut server, &common::page_path("button"), 404);
    // A local copy exists but must not be used
    let docs = common::create_docs_dir(&[("button", common::fixture("input.md").as_str())])?;
    let loader = common::test_loader(&server.url(), docs.path());

    let meta = loader.load_online("button", None).await;

    assert_eq!(meta, ComponentMeta::degraded("wd-button", ""));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_missing_everywhere_degrades() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = common::create_error_mock(&mut server, &common::page_path("ghost"), 404);
    let docs = common::create_docs_dir(&[])?;
    let loader = common::test_loader(&server.url(), docs.path());

    let meta = loader.load("ghost", None).await;

    assert!(meta.is_empty());
    assert_eq!(meta.name, "wd-ghost");
    assert!(meta.documentation.is_empty());
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_serialized_shape() -> anyhow::Result<()> {
    let docs = common::create_docs_dir(&[("input", common::fixture("input.md").as_str())])?;
    let loader = common::test_loader("http://192.0.2.1", docs.path());
    let meta = loader.load_local("input", None);

    let json: serde_json::Value = serde_json::from_str(&meta.to_json()?)?;
    assert_eq!(json["name"], "wd-input");
    assert_eq!(json["props"][0]["name"], "v-model");
    assert_eq!(json["props"][0]["type"], "string");
    assert!(json["externalClasses"].is_array());
    assert!(json.get("dataStructures").is_none());

    let back: ComponentMeta = serde_json::from_value(json)?;
    assert_eq!(back, meta);
    Ok(())
}
