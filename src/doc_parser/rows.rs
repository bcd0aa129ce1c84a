//! Row normalization: raw table rows → typed fields.
//!
//! Props rows go through type/enum inference and alias expansion. Every
//! other section kind is a fixed positional mapping.

use crate::schema::{DocField, PropField, PropType};
use crate::utils::{BINDING_NOTE, strip_code_spans};

use super::table::RawTableRow;

/// The three interchangeable spellings of the two-way binding prop, in the
/// order missing ones are synthesized.
pub const BINDING_SPELLINGS: [&str; 3] = ["v-model", "model-value", "modelValue"];

/// Column layout of a props row
mod col {
    pub const NAME: usize = 0;
    pub const DESCRIPTION: usize = 1;
    pub const TYPE: usize = 2;
    pub const VALUES: usize = 3;
    pub const DEFAULT: usize = 4;
    pub const VERSION: usize = 5;
}

/// Which table a non-props row came from; fixes the version column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSection {
    /// name | description | params | version
    Events,
    /// name | description | version
    Slots,
    /// name | description | version
    ExternalClasses,
}

impl FieldSection {
    #[must_use]
    pub fn version_column(self) -> usize {
        match self {
            FieldSection::Events => 3,
            FieldSection::Slots | FieldSection::ExternalClasses => 2,
        }
    }
}

/// Expand one props row into its fields.
///
/// Aliases in the name cell (`v-model / modelValue`) each become a field
/// sharing type, values, default and version. When any alias is a binding
/// spelling, the missing binding spellings are appended so all three are
/// always queryable.
pub fn normalize_prop_row(row: &RawTableRow) -> Vec<PropField> {
    let aliases: Vec<String> = row
        .cell(col::NAME)
        .unwrap_or_default()
        .split('/')
        .map(strip_code_spans)
        .filter(|name| !name.is_empty())
        .collect();

    if aliases.is_empty() {
        return Vec::new();
    }

    let raw_type = infer_raw_type(row.cell(col::TYPE));
    let kind = infer_kind(&raw_type, row.cell(col::VALUES));
    let description = row.cell(col::DESCRIPTION).unwrap_or_default();
    let bound_description = format!("{description}{BINDING_NOTE}");
    let default = row.meaningful_cell(col::DEFAULT).map(str::to_string);
    let version = row.meaningful_cell(col::VERSION).map(str::to_string);

    let field = |name: &str, description: &str| PropField {
        name: name.to_string(),
        kind: kind.clone(),
        raw_type: raw_type.clone(),
        description: description.to_string(),
        default: default.clone(),
        version: version.clone(),
    };

    let missing_spellings: Vec<&str> =
        if aliases.iter().any(|a| BINDING_SPELLINGS.contains(&a.as_str())) {
            BINDING_SPELLINGS
                .into_iter()
                .filter(|spelling| !aliases.iter().any(|a| a.as_str() == *spelling))
                .collect()
        } else {
            Vec::new()
        };

    let authored = aliases.iter().enumerate().map(|(i, name)| {
        if i == 0 {
            field(name, description)
        } else {
            field(name, &bound_description)
        }
    });
    let synthesized = missing_spellings
        .into_iter()
        .map(|spelling| field(spelling, &bound_description));

    authored.chain(synthesized).collect()
}

/// Documented type, lower-cased, code spans removed; `string` when absent.
fn infer_raw_type(cell: Option<&str>) -> String {
    cell.map(|c| strip_code_spans(c).to_lowercase())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "string".to_string())
}

/// A `string` prop with a `/`-separated values cell is an enum.
fn infer_kind(raw_type: &str, values: Option<&str>) -> PropType {
    if raw_type == "string"
        && let Some(values) = values.filter(|v| *v != "-" && v.contains('/'))
    {
        let values: Vec<String> = values
            .split('/')
            .map(strip_code_spans)
            .filter(|v| !v.is_empty() && v != "-")
            .collect();
        if !values.is_empty() {
            return PropType::Enum(values);
        }
    }
    PropType::from_documented(raw_type)
}

/// Map an events / slots / external-classes row.
///
/// Returns `None` for rows with an empty name cell.
pub fn normalize_doc_row(row: &RawTableRow, section: FieldSection) -> Option<DocField> {
    let name = strip_code_spans(row.cell(0)?);
    if name.is_empty() {
        return None;
    }
    Some(DocField {
        name,
        description: row.cell(1).unwrap_or_default().to_string(),
        version: row
            .meaningful_cell(section.version_column())
            .map(str::to_string),
    })
}
