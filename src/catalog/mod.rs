//! Owned per-component metadata cache.
//!
//! A catalog is built once from a list of component entries and keeps the
//! resulting records for its whole lifetime. One entry failing to load never
//! affects the others: it is still present, just degraded.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::schema::{ComponentMeta, SchemaLoader};
use crate::utils::camel_to_kebab;

/// One component to load: its tag and, when it is documented inside another
/// component's page, that page's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_source: Option<String>,
}

impl ComponentEntry {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            doc_source: None,
        }
    }

    #[must_use]
    pub fn with_doc_source(mut self, doc_source: impl Into<String>) -> Self {
        self.doc_source = Some(doc_source.into());
        self
    }
}

/// Loaded metadata, addressable by `wd-button`, `button` or `wdButton`
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    tag_prefix: String,
    records: Vec<ComponentMeta>,
    by_tag: HashMap<String, usize>,
}

impl ComponentCatalog {
    /// Load every entry concurrently (online with local fallback).
    pub async fn load_all(loader: &SchemaLoader, entries: &[ComponentEntry]) -> Self {
        let loads = entries
            .iter()
            .map(|entry| loader.load(&entry.tag, entry.doc_source.as_deref()));
        let records = join_all(loads).await;
        Self::log_summary(&records);
        Self::from_records(loader.config().tag_prefix(), records)
    }

    /// Load every entry from the local copies, in order.
    pub fn load_all_local(loader: &SchemaLoader, entries: &[ComponentEntry]) -> Self {
        let records: Vec<ComponentMeta> = entries
            .iter()
            .map(|entry| loader.load_local(&entry.tag, entry.doc_source.as_deref()))
            .collect();
        Self::log_summary(&records);
        Self::from_records(loader.config().tag_prefix(), records)
    }

    /// Wrap already-built records. Later duplicates of a tag replace earlier
    /// ones.
    pub fn from_records(tag_prefix: &str, records: impl IntoIterator<Item = ComponentMeta>) -> Self {
        let mut catalog = Self {
            tag_prefix: tag_prefix.to_string(),
            ..Self::default()
        };
        for record in records {
            match catalog.by_tag.get(&record.name) {
                Some(&index) => catalog.records[index] = record,
                None => {
                    catalog.by_tag.insert(record.name.clone(), catalog.records.len());
                    catalog.records.push(record);
                }
            }
        }
        catalog
    }

    /// Look up by full tag, short name or camelCase tag.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ComponentMeta> {
        self.index_of(name).map(|i| &self.records[i])
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        if let Some(&i) = self.by_tag.get(name) {
            return Some(i);
        }

        let kebab = camel_to_kebab(name);
        if let Some(&i) = self.by_tag.get(&kebab) {
            return Some(i);
        }

        let prefixed = format!("{}{kebab}", self.tag_prefix);
        self.by_tag.get(&prefixed).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Records in load order
    pub fn iter(&self) -> impl Iterator<Item = &ComponentMeta> {
        self.records.iter()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn log_summary(records: &[ComponentMeta]) {
        let degraded = records.iter().filter(|r| r.is_empty()).count();
        tracing::info!(
            components = records.len(),
            degraded,
            "Component catalog loaded"
        );
    }
}

impl<'a> IntoIterator for &'a ComponentCatalog {
    type Item = &'a ComponentMeta;
    type IntoIter = std::slice::Iter<'a, ComponentMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
