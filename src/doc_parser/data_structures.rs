//! Auxiliary record definitions (`## Action 数据结构`).
//!
//! Unlike the section tables these are found by scanning the whole document.
//! Each block runs from its heading to the next `##`/`###` heading, a link
//! reference line, or the end of the document.

use regex::Regex;
use std::sync::LazyLock;

use crate::schema::{DataStructure, StructField};
use crate::utils::DATA_STRUCTURE_SUFFIX;

use super::table::{RawTableRow, parse_table_block};

static DATA_STRUCTURE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^##[ \t]+(.*?{})[ \t]*\r?$",
        regex::escape(DATA_STRUCTURE_SUFFIX)
    ))
    .expect("DATA_STRUCTURE_HEADING: hardcoded regex is valid")
});

/// Every data structure in `text`, in document order.
///
/// Structures whose table is malformed are kept with an empty field list
/// only when at least a header, separator and one row were present;
/// otherwise they are skipped.
pub fn extract_data_structures(text: &str) -> Vec<DataStructure> {
    let lines: Vec<&str> = text.lines().collect();
    let mut structures = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(caps) = DATA_STRUCTURE_HEADING.captures(lines[i]) else {
            i += 1;
            continue;
        };
        let name = caps[1].trim().to_string();

        let body_start = i + 1;
        let mut end = body_start;
        while end < lines.len() && !ends_block(lines[end]) {
            end += 1;
        }

        let block = lines[body_start..end].join("\n");
        match parse_table_block(&block) {
            Ok(rows) => structures.push(DataStructure {
                name,
                fields: rows.iter().filter_map(struct_field).collect(),
            }),
            Err(e) => tracing::debug!(structure = %name, error = %e, "Skipping data structure without a table"),
        }

        i = end;
    }

    structures
}

fn ends_block(line: &str) -> bool {
    line.starts_with("## ") || line.starts_with("### ") || line.starts_with('[')
}

/// `name | description | type | version`; rows with fewer than 3 cells are
/// dropped.
fn struct_field(row: &RawTableRow) -> Option<StructField> {
    if row.len() < 3 {
        return None;
    }
    Some(StructField {
        name: row.cells[0].clone(),
        description: row.cells[1].clone(),
        type_name: row.cells[2].clone(),
        version: row.meaningful_cell(3).map(str::to_string),
    })
}
