//! Markdown documentation parsing
//!
//! The pipeline for one section is: locate the heading ([`heading`]), slice
//! the table under it ([`table`]), then normalize each row ([`rows`]).
//! Auxiliary data structures are scanned separately ([`data_structures`]).

pub mod data_structures;
pub mod heading;
pub mod rows;
pub mod table;

pub use data_structures::extract_data_structures;
pub use heading::{HeadingLocator, HeadingStrategy, SectionMatch, locate_section};
pub use rows::{BINDING_SPELLINGS, FieldSection, normalize_doc_row, normalize_prop_row};
pub use table::{RawTableRow, parse_table_block, slice_table};

use crate::errors::{DocError, DocResult};
use crate::schema::{DocField, PropField};

/// Locate `section_title` and slice its table.
///
/// # Errors
///
/// `DocError::SectionNotFound` when no heading matches, or
/// `DocError::MalformedTable` from the slicer.
pub fn section_rows(
    text: &str,
    section_title: &str,
    component: Option<&str>,
) -> DocResult<Vec<RawTableRow>> {
    let found = locate_section(text, section_title, component).ok_or_else(|| {
        DocError::SectionNotFound {
            section: section_title.to_string(),
        }
    })?;
    tracing::trace!(
        section = section_title,
        strategy = ?found.strategy,
        "Located section heading"
    );
    slice_table(text, found.offset)
}

/// Like [`section_rows`] but absent or malformed sections are simply empty.
pub fn section_rows_or_empty(
    text: &str,
    section_title: &str,
    component: Option<&str>,
) -> Vec<RawTableRow> {
    section_rows(text, section_title, component).unwrap_or_else(|e| {
        tracing::debug!(section = section_title, error = %e, "Section yields no rows");
        Vec::new()
    })
}

/// All props documented under `section_title`.
pub fn extract_props(text: &str, section_title: &str, component: Option<&str>) -> Vec<PropField> {
    section_rows_or_empty(text, section_title, component)
        .iter()
        .flat_map(normalize_prop_row)
        .collect()
}

/// All events, slots or external classes documented under `section_title`.
pub fn extract_doc_fields(
    text: &str,
    section_title: &str,
    component: Option<&str>,
    kind: FieldSection,
) -> Vec<DocField> {
    section_rows_or_empty(text, section_title, component)
        .iter()
        .filter_map(|row| normalize_doc_row(row, kind))
        .collect()
}
