//! Naming-convention helpers
//!
//! Component documents mix kebab-case (`model-value`), camelCase
//! (`modelValue`) and PascalCase headings (`TableColumn Attributes`). These
//! helpers convert between them without allocating more than the result.

use convert_case::{Case, Casing};

/// Capitalize each hyphen-delimited segment and concatenate.
///
/// Only the first character of each segment changes, so `table-col` becomes
/// `TableCol` and `qr-code` becomes `QrCode`. The rest of a segment is kept
/// as written: `Case::Pascal` would lowercase it and re-split camelCase
/// segments, which breaks matching against headings like `QRCode Attributes`.
///
/// # Examples
/// ```
/// # use wotdoc_meta::utils::naming::to_pascal_case;
/// assert_eq!(to_pascal_case("table-col"), "TableCol");
/// assert_eq!(to_pascal_case("button"), "Button");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('-') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// `modelValue` → `model-value`
pub fn camel_to_kebab(name: &str) -> String {
    if !name.chars().any(|c| c.is_ascii_uppercase()) {
        return name.to_string();
    }
    name.to_case(Case::Kebab)
}

/// `model-value` → `modelValue`
pub fn kebab_to_camel(name: &str) -> String {
    if !name.contains('-') {
        return name.to_string();
    }
    name.to_case(Case::Camel)
}

/// True when two attribute names refer to the same thing under kebab/camel
/// equivalence.
pub fn names_match(documented: &str, queried: &str) -> bool {
    documented == queried
        || camel_to_kebab(documented) == queried
        || kebab_to_camel(documented) == queried
        || camel_to_kebab(queried) == documented
}

/// Remove inline code-span markers and surrounding whitespace.
pub fn strip_code_spans(cell: &str) -> String {
    cell.replace('`', "").trim().to_string()
}
