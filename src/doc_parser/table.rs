//! Pipe-table slicing.
//!
//! Given the offset just past a section heading, pull out the data rows of
//! the first table in that section. The block runs from the first `|` to the
//! next blank line or heading, whichever comes first; the search for `|` never
//! crosses into the next section.

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{DocError, DocResult};

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("HTML_TAG_RE: hardcoded regex is valid"));

/// One table row: trimmed cells in column order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTableRow {
    pub cells: Vec<String>,
}

impl RawTableRow {
    #[must_use]
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell at `index`, if the row has that many cells
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Cell at `index` unless it is missing, empty, or the literal `-`
    #[must_use]
    pub fn meaningful_cell(&self, index: usize) -> Option<&str> {
        self.cell(index).filter(|c| !c.is_empty() && *c != "-")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RawTableRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Extract the data rows of the table that follows `offset`.
///
/// # Errors
///
/// `DocError::MalformedTable` when the section has no `|`, or fewer than three
/// pipe-delimited lines (header, separator, data) survive.
pub fn slice_table(text: &str, offset: usize) -> DocResult<Vec<RawTableRow>> {
    let rest = text.get(offset..).unwrap_or_default();
    let section = &rest[..next_heading_offset(rest).unwrap_or(rest.len())];

    let Some(pipe) = section.find('|') else {
        return Err(DocError::MalformedTable { lines: 0 });
    };

    parse_table_block(take_until_blank_line(&section[pipe..]))
}

/// Turn a block of pipe-delimited lines into data rows.
///
/// Tags are stripped (inner text kept), lines without `|` dropped, the first
/// surviving line is the header and is always discarded, separator rows are
/// discarded wherever they appear.
///
/// # Errors
///
/// `DocError::MalformedTable` when fewer than three lines survive.
pub fn parse_table_block(block: &str) -> DocResult<Vec<RawTableRow>> {
    let stripped = HTML_TAG_RE.replace_all(block, "");

    let lines: Vec<&str> = stripped
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && l.contains('|'))
        .collect();

    if lines.len() < 3 {
        return Err(DocError::MalformedTable { lines: lines.len() });
    }

    Ok(lines
        .iter()
        .skip(1)
        .filter(|line| !is_separator_row(line))
        .map(|line| RawTableRow::new(split_cells(line)))
        .filter(|row| !row.is_empty())
        .collect())
}

/// Separator rows contain only `-`, alignment colons and whitespace once the
/// pipes are removed.
///
/// # Examples
///
/// ```rust
/// # use wotdoc_meta::doc_parser::table::is_separator_row;
/// assert!(is_separator_row("|---|---|"));
/// assert!(is_separator_row("| :--- | ---: |"));
/// assert!(!is_separator_row("| name | - |"));
/// ```
pub fn is_separator_row(row: &str) -> bool {
    let mut has_dash = false;
    let mut has_content = false;
    for c in row.chars().filter(|&c| c != '|') {
        match c {
            '-' => has_dash = true,
            ':' => has_content = true,
            c if c.is_whitespace() => {}
            _ => return false,
        }
    }
    has_dash || !has_content
}

/// Split a row on unescaped `|`, trim cells, and drop the empty edge cells
/// produced by a row bounded by pipes.
pub fn split_cells(line: &str) -> Vec<String> {
    let line = line.trim();
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    cells.push(current);

    let mut cells: Vec<String> = cells.into_iter().map(|c| c.trim().to_string()).collect();
    if line.ends_with('|') && !line.ends_with("\\|") {
        cells.pop();
    }
    if line.starts_with('|') && !cells.is_empty() {
        cells.remove(0);
    }
    cells
}

/// Byte offset of the first heading line in `text`, skipping fenced code.
pub(crate) fn next_heading_offset(text: &str) -> Option<usize> {
    let mut in_fence = false;
    let mut pos = 0;
    for line in text.split_inclusive('\n') {
        let start = pos;
        pos += line.len();
        let trimmed = line.trim_start();

        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if !in_fence && is_heading_line(trimmed) {
            return Some(start);
        }
    }
    None
}

/// ATX heading: 1-6 `#` followed by whitespace or end of line.
pub(crate) fn is_heading_line(trimmed: &str) -> bool {
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    (1..=6).contains(&hashes)
        && trimmed[hashes..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace)
}

fn take_until_blank_line(block: &str) -> &str {
    let mut end = 0;
    for line in block.split_inclusive('\n') {
        if line.trim().is_empty() {
            break;
        }
        end += line.len();
    }
    &block[..end]
}
