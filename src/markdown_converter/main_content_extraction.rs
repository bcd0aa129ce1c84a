//! Primary content region extraction for documentation pages.
//!
//! The page is reduced to the first element matching one of the configured
//! content selectors (tried in priority order), falling back to `<body>`.
//! Site chrome inside that region is dropped while serializing it back to
//! HTML, so the converter only ever sees document text and tables.

use anyhow::{Context, Result};
use ego_tree::NodeId;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Documentation pages are a few hundred KB at most (10 MB)
pub(super) const MAX_HTML_SIZE: usize = 10 * 1024 * 1024;

/// Serialization stops descending past this depth.
const MAX_HTML_NESTING_DEPTH: usize = 100;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Chrome removed from the content region before conversion
const REMOVE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "template",
    "iframe",
    "nav",
    "aside",
    "footer",
    ".header-anchor",
    ".VPDocFooter",
    ".VPLocalNav",
    ".edit-link",
    ".prev-next",
    ".line-numbers-wrapper",
    "button.copy",
    "span.lang",
];

static REMOVE_SELECTOR_LIST: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    REMOVE_SELECTORS
        .iter()
        .map(|s| {
            Selector::parse(s).unwrap_or_else(|e| panic!("BUG: hardcoded CSS selector '{s}' is invalid: {e}"))
        })
        .collect()
});

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body").expect("BUG: hardcoded CSS selector 'body' is invalid")
});

/// Reduce `html` to its primary content region.
///
/// `content_selectors` are tried in order; the first one with a match wins.
/// Without any match the `<body>` is used, and failing that the input is
/// returned unchanged.
///
/// # Errors
///
/// Fails when the input exceeds [`MAX_HTML_SIZE`] or a selector does not
/// parse.
pub fn extract_main_content<S: AsRef<str>>(html: &str, content_selectors: &[S]) -> Result<String> {
    if html.len() > MAX_HTML_SIZE {
        anyhow::bail!(
            "HTML input too large: {} bytes (limit {} bytes)",
            html.len(),
            MAX_HTML_SIZE
        );
    }

    let document = Html::parse_document(html);

    for raw in content_selectors {
        let raw = raw.as_ref();
        let selector = Selector::parse(raw)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("invalid content selector '{raw}'"))?;

        if let Some(element) = document.select(&selector).next() {
            log::debug!("Content region matched selector '{raw}'");
            return Ok(remove_chrome(&element));
        }
    }

    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        log::debug!("No content selector matched, using <body>");
        return Ok(remove_chrome(&body));
    }

    Ok(html.to_string())
}

/// Serialize `element`'s children, skipping every chrome element subtree.
fn remove_chrome(element: &ElementRef) -> String {
    let to_remove: HashSet<NodeId> = REMOVE_SELECTOR_LIST
        .iter()
        .flat_map(|sel| element.select(sel).map(|e| e.id()))
        .collect();

    let mut output = String::new();
    serialize_children(element, &to_remove, &mut output, 0);
    output
}

fn serialize_children(
    element: &ElementRef,
    to_remove: &HashSet<NodeId>,
    output: &mut String,
    depth: usize,
) {
    if depth > MAX_HTML_NESTING_DEPTH {
        log::warn!(
            "HTML nesting deeper than {MAX_HTML_NESTING_DEPTH} at <{}>, truncating",
            element.value().name()
        );
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_escaped(output, text, false),
            Node::Element(_) => {
                let Some(child_elem) = ElementRef::wrap(child) else {
                    continue;
                };
                if to_remove.contains(&child_elem.id()) {
                    continue;
                }

                let name = child_elem.value().name();
                output.push('<');
                output.push_str(name);
                for (attr, value) in child_elem.value().attrs() {
                    output.push(' ');
                    output.push_str(attr);
                    output.push_str("=\"");
                    push_escaped(output, value, true);
                    output.push('"');
                }
                output.push('>');

                if VOID_ELEMENTS.contains(&name) {
                    continue;
                }

                serialize_children(&child_elem, to_remove, output, depth + 1);

                output.push_str("</");
                output.push_str(name);
                output.push('>');
            }
            // Comments and doctypes carry nothing the parser needs
            _ => {}
        }
    }
}

fn push_escaped(output: &mut String, text: &str, in_attribute: bool) {
    for ch in text.chars() {
        match ch {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '&' => output.push_str("&amp;"),
            '"' if in_attribute => output.push_str("&quot;"),
            c => output.push(c),
        }
    }
}
