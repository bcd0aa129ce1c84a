//! Typed component metadata records
//!
//! These are what downstream tooling (completion, hover, diagnostics)
//! consumes. Every record is built fresh per extraction and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};

use crate::utils::names_match;

/// Value kind of a documented prop.
///
/// Closed set: consumers can match exhaustively. `Enum` always carries at
/// least one value; the row normalizer is the only place that builds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "lowercase")]
pub enum PropType {
    String,
    Number,
    Boolean,
    Enum(Vec<String>),
}

impl PropType {
    /// Map a lower-cased documented type onto the closed set.
    ///
    /// Anything that is not `number` or `boolean` is treated as a string;
    /// callers keep the documented text separately.
    #[must_use]
    pub fn from_documented(raw: &str) -> Self {
        match raw {
            "number" => PropType::Number,
            "boolean" => PropType::Boolean,
            _ => PropType::String,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PropType::String => "string",
            PropType::Number => "number",
            PropType::Boolean => "boolean",
            PropType::Enum(_) => "enum",
        }
    }

    /// Allowed values, only for `Enum`
    #[must_use]
    pub fn values(&self) -> Option<&[String]> {
        match self {
            PropType::Enum(values) => Some(values),
            _ => None,
        }
    }
}

impl std::fmt::Display for PropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attribute of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropField {
    pub name: String,
    #[serde(flatten)]
    pub kind: PropType,
    /// Documented type text, lower-cased (`string | number`, `array`, ...)
    pub raw_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PropField {
    /// Whether `value` is an acceptable literal for this prop.
    ///
    /// Only enum props restrict literals.
    #[must_use]
    pub fn accepts_value(&self, value: &str) -> bool {
        match &self.kind {
            PropType::Enum(values) => values.iter().any(|v| v == value),
            _ => true,
        }
    }
}

/// Event, slot or external style class entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocField {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Field of an auxiliary data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Named auxiliary record definition (`## Action 数据结构`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStructure {
    pub name: String,
    pub fields: Vec<StructField>,
}

/// Normalized metadata for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    /// Canonical prefixed tag, e.g. `wd-button`
    pub name: String,
    pub props: Vec<PropField>,
    pub events: Vec<DocField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<DocField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_classes: Option<Vec<DocField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_structures: Option<Vec<DataStructure>>,
    /// Full raw document, kept verbatim for hover rendering
    pub documentation: String,
}

impl ComponentMeta {
    /// Minimal record used when extraction failed.
    #[must_use]
    pub fn degraded(tag: impl Into<String>, documentation: impl Into<String>) -> Self {
        Self {
            name: tag.into(),
            props: Vec::new(),
            events: Vec::new(),
            slots: None,
            external_classes: None,
            data_structures: None,
            documentation: documentation.into(),
        }
    }

    /// Look up a prop by exact, kebab-case or camelCase name.
    #[must_use]
    pub fn find_prop(&self, name: &str) -> Option<&PropField> {
        self.props
            .iter()
            .find(|p| p.name == name)
            .or_else(|| self.props.iter().find(|p| names_match(&p.name, name)))
    }

    #[must_use]
    pub fn find_event(&self, name: &str) -> Option<&DocField> {
        find_doc_field(&self.events, name)
    }

    #[must_use]
    pub fn find_slot(&self, name: &str) -> Option<&DocField> {
        self.slots.as_deref().and_then(|slots| find_doc_field(slots, name))
    }

    #[must_use]
    pub fn find_external_class(&self, name: &str) -> Option<&DocField> {
        self.external_classes
            .as_deref()
            .and_then(|classes| find_doc_field(classes, name))
    }

    #[must_use]
    pub fn find_data_structure(&self, name: &str) -> Option<&DataStructure> {
        self.data_structures
            .as_deref()
            .and_then(|all| all.iter().find(|d| d.name == name))
    }

    /// True when nothing beyond the tag was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
            && self.events.is_empty()
            && self.slots.is_none()
            && self.external_classes.is_none()
            && self.data_structures.is_none()
    }

    /// Serialize for the editor layer.
    ///
    /// # Errors
    ///
    /// Only fails if serde_json does, which it cannot for these types.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn find_doc_field<'a>(fields: &'a [DocField], name: &str) -> Option<&'a DocField> {
    fields
        .iter()
        .find(|f| f.name == name)
        .or_else(|| fields.iter().find(|f| names_match(&f.name, name)))
}
