pub mod catalog;
pub mod config;
pub mod doc_parser;
pub mod doc_source;
pub mod errors;
pub mod markdown_converter;
pub mod schema;
pub mod utils;

pub use catalog::{ComponentCatalog, ComponentEntry};
pub use config::{MetaConfig, MetaConfigBuilder};
pub use doc_source::{AcquiredDoc, ContentAcquirer, DocOrigin};
pub use errors::{DocError, DocResult};
pub use markdown_converter::MarkdownConverter;
pub use schema::*;

/// Load one component with the default configuration (online, local fallback).
///
/// # Errors
///
/// Only if the HTTP client cannot be built; extraction itself never fails.
pub async fn load_component(component: &str, doc_source: Option<&str>) -> DocResult<ComponentMeta> {
    let loader = SchemaLoader::new(MetaConfig::default())?;
    Ok(loader.load(component, doc_source).await)
}
