//! Schema assembly: acquired documentation text → `ComponentMeta`.
//!
//! Every entry point is fail-soft. Whatever goes wrong (network, missing
//! file, absent sections, malformed tables) the caller still gets a valid
//! record, at worst one with nothing but the tag and whatever text was read.

use crate::config::MetaConfig;
use crate::doc_parser::{FieldSection, extract_data_structures, extract_doc_fields, extract_props};
use crate::doc_source::{AcquiredDoc, ContentAcquirer, DocOrigin};
use crate::errors::DocResult;
use crate::utils::{
    SECTION_ATTRIBUTES, SECTION_EVENTS, SECTION_EXTERNAL_CLASSES, SECTION_SLOT, SECTION_SLOTS,
};

use super::types::ComponentMeta;

/// Builds `ComponentMeta` records for one configuration
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    acquirer: ContentAcquirer,
}

impl SchemaLoader {
    /// # Errors
    ///
    /// `DocError::Config` if the HTTP client cannot be built.
    pub fn new(config: MetaConfig) -> DocResult<Self> {
        Ok(Self::with_acquirer(ContentAcquirer::new(config)?))
    }

    #[must_use]
    pub fn with_acquirer(acquirer: ContentAcquirer) -> Self {
        Self { acquirer }
    }

    #[must_use]
    pub fn config(&self) -> &MetaConfig {
        self.acquirer.config()
    }

    #[must_use]
    pub fn acquirer(&self) -> &ContentAcquirer {
        &self.acquirer
    }

    /// Assemble from the bundled Markdown copy only. Never touches the network.
    ///
    /// `component` may be a bare name (`table-col`) or a tag (`wd-table-col`).
    /// `doc_source` names the document that hosts it when that differs
    /// (`table`); section headings are then qualified by the component name.
    pub fn load_local(&self, component: &str, doc_source: Option<&str>) -> ComponentMeta {
        let name = self.config().component_name_for(component);
        let acquired = self.acquirer.acquire_local(resolve(name, doc_source));
        self.finish(name, doc_source, acquired)
    }

    /// Assemble from the canonical page, falling back to the local copy.
    pub async fn load(&self, component: &str, doc_source: Option<&str>) -> ComponentMeta {
        let name = self.config().component_name_for(component);
        let acquired = self.acquirer.acquire(resolve(name, doc_source)).await;
        self.finish(name, doc_source, acquired)
    }

    /// Assemble from the canonical page only.
    ///
    /// A failed fetch or conversion yields a degraded record for this
    /// component.
    pub async fn load_online(&self, component: &str, doc_source: Option<&str>) -> ComponentMeta {
        let name = self.config().component_name_for(component);
        match self.acquirer.fetch_online(resolve(name, doc_source)).await {
            Ok(text) => self.finish(
                name,
                doc_source,
                AcquiredDoc {
                    text,
                    origin: DocOrigin::Online,
                },
            ),
            Err(e) => {
                tracing::warn!(component = name, error = %e, "Online load failed, returning degraded record");
                ComponentMeta::degraded(self.config().tag_for(name), String::new())
            }
        }
    }

    /// Assemble from text already in hand.
    #[must_use]
    pub fn parse(&self, component: &str, doc_source: Option<&str>, text: &str) -> ComponentMeta {
        let name = self.config().component_name_for(component);
        assemble(&self.config().tag_for(name), name, doc_source, text.to_string())
    }

    /// Canonical page link for hover/help rendering
    #[must_use]
    pub fn doc_link(&self, component: &str, doc_source: Option<&str>) -> String {
        let name = self.config().component_name_for(component);
        self.config().doc_url(resolve(name, doc_source))
    }

    fn finish(&self, name: &str, doc_source: Option<&str>, acquired: AcquiredDoc) -> ComponentMeta {
        let tag = self.config().tag_for(name);
        if acquired.origin == DocOrigin::Missing {
            return ComponentMeta::degraded(tag, acquired.text);
        }

        let meta = assemble(&tag, name, doc_source, acquired.text);
        tracing::debug!(
            component = %tag,
            origin = ?acquired.origin,
            props = meta.props.len(),
            events = meta.events.len(),
            "Assembled component metadata"
        );
        meta
    }
}

/// Document name: the hosting document when given, else the component itself
fn resolve<'a>(name: &'a str, doc_source: Option<&'a str>) -> &'a str {
    doc_source.filter(|s| !s.trim().is_empty()).unwrap_or(name)
}

fn assemble(tag: &str, name: &str, doc_source: Option<&str>, text: String) -> ComponentMeta {
    if text.trim().is_empty() {
        return ComponentMeta::degraded(tag, text);
    }

    // Only a shared document needs headings like `## TableCol Attributes`
    let qualifier = doc_source.filter(|s| !s.trim().is_empty()).map(|_| name);

    let props = extract_props(&text, SECTION_ATTRIBUTES, qualifier);
    let events = extract_doc_fields(&text, SECTION_EVENTS, qualifier, FieldSection::Events);

    let mut slots = extract_doc_fields(&text, SECTION_SLOT, qualifier, FieldSection::Slots);
    slots.extend(extract_doc_fields(&text, SECTION_SLOTS, qualifier, FieldSection::Slots));

    let external_classes = extract_doc_fields(
        &text,
        SECTION_EXTERNAL_CLASSES,
        qualifier,
        FieldSection::ExternalClasses,
    );
    let data_structures = extract_data_structures(&text);

    ComponentMeta {
        name: tag.to_string(),
        props,
        events,
        slots: non_empty(slots),
        external_classes: non_empty(external_classes),
        data_structures: non_empty(data_structures),
        documentation: text,
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
