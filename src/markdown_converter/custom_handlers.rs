//! Custom handlers for htmd HTML-to-Markdown conversion
//!
//! Tables are rendered as pipe rows with one line per `<tr>` so the
//! documentation parser can slice them. Code blocks keep their raw text.

use htmd::{
    Element, HtmlToMarkdown,
    element_handler::{HandlerResult, Handlers},
};
use markup5ever_rcdom::{Node, NodeData};
use std::rc::Rc;

/// Create an htmd converter for documentation pages
///
/// Custom handlers:
/// - `<h1>`..`<h6>`: ATX headings on a single line
/// - `<table>`: pipe table, header row first, `|` in cells escaped
/// - `<pre>`: fenced block, language taken from a `language-*` class
/// - `<code>`: inline code span from raw text
/// - `<a>`: link text falls back to aria-label, title, then href
pub fn create_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .add_handler(vec!["h1", "h2", "h3", "h4", "h5", "h6"], heading_handler)
        .add_handler(vec!["table"], table_handler)
        .add_handler(vec!["pre"], pre_handler)
        .add_handler(vec!["code"], code_handler)
        .add_handler(vec!["a"], link_handler)
        .build()
}

fn heading_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let level = element_name(element.node)
        .and_then(|tag| tag.strip_prefix('h').and_then(|n| n.parse::<usize>().ok()))
        .unwrap_or(2);
    let content = handlers.walk_children(element.node).content;
    let text = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return Some(HandlerResult::from(String::new()));
    }
    Some(HandlerResult::from(format!("\n\n{} {text}\n\n", "#".repeat(level))))
}

fn table_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let mut rows = Vec::new();
    collect_rows(element.node, &mut rows);
    rows.retain(|cells| !cells.is_empty());

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return Some(HandlerResult::from(String::new()));
    }

    let mut output = String::from("\n\n");
    for (i, cells) in rows.iter().enumerate() {
        output.push_str(&format_row(cells, columns));
        output.push('\n');
        if i == 0 {
            output.push_str(&format_row(&vec!["---".to_string(); columns], columns));
            output.push('\n');
        }
    }
    output.push('\n');

    Some(HandlerResult::from(output))
}

/// `<tr>` rows in document order, looking through thead/tbody/tfoot.
/// Nested tables are not descended into.
fn collect_rows(node: &Rc<Node>, rows: &mut Vec<Vec<String>>) {
    for child in node.children.borrow().iter() {
        match element_name(child).as_deref() {
            Some("tr") => rows.push(row_cells(child)),
            Some("thead" | "tbody" | "tfoot") => collect_rows(child, rows),
            _ => {}
        }
    }
}

fn row_cells(tr: &Rc<Node>) -> Vec<String> {
    tr.children
        .borrow()
        .iter()
        .filter(|c| matches!(element_name(c).as_deref(), Some("td" | "th")))
        .map(|cell| {
            let mut text = String::new();
            render_cell(cell, &mut text);
            normalize_cell_content(&text)
        })
        .collect()
}

/// Inline rendering for table cells: text, code spans, `<br>` as a space.
fn render_cell(node: &Rc<Node>, out: &mut String) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { name, .. } => match &*name.local {
                "br" => out.push(' '),
                "code" => {
                    let code = extract_raw_text(child);
                    let code = code.trim();
                    if !code.is_empty() {
                        out.push('`');
                        out.push_str(code);
                        out.push('`');
                    }
                }
                _ => render_cell(child, out),
            },
            _ => {}
        }
    }
}

/// Collapse whitespace and escape pipes so a cell stays on one row
fn normalize_cell_content(content: &str) -> String {
    content
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

fn format_row(cells: &[String], columns: usize) -> String {
    let mut row = String::from("|");
    for i in 0..columns {
        row.push(' ');
        row.push_str(cells.get(i).map(String::as_str).unwrap_or_default());
        row.push_str(" |");
    }
    row
}

/// Handle `<pre>` elements - code blocks with fences
fn pre_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let content = extract_raw_text(element.node);
    let content = content.trim_matches('\n');

    let language = get_attr(element.attrs, "class")
        .and_then(|class| language_from_class(&class))
        .or_else(|| parent_class(element.node).and_then(|class| language_from_class(&class)));

    let fence = match language {
        Some(lang) => format!("```{lang}"),
        None => "```".to_string(),
    };

    Some(HandlerResult::from(format!("\n\n{fence}\n{content}\n```\n\n")))
}

/// Handle inline `<code>` - `<pre>` never walks into its children
fn code_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let content = extract_raw_text(element.node);
    let trimmed = content.trim();

    let result = if trimmed.contains('`') {
        format!("`` {trimmed} ``")
    } else {
        format!("`{trimmed}`")
    };
    Some(HandlerResult::from(result))
}

/// Handle `<a>` elements with fallback text extraction
fn link_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let href = get_attr(element.attrs, "href").unwrap_or_default();
    let text = handlers.walk_children(element.node).content;
    let text = text.trim();

    let link_text = if text.is_empty() {
        get_attr(element.attrs, "aria-label")
            .or_else(|| get_attr(element.attrs, "title"))
            .unwrap_or_else(|| href.clone())
    } else {
        text.to_string()
    };

    if href.is_empty() {
        return Some(HandlerResult::from(link_text));
    }
    Some(HandlerResult::from(format!("[{link_text}]({href})")))
}

// === Helper Functions ===

/// Raw text of a subtree, whitespace preserved
fn extract_raw_text(node: &Rc<Node>) -> String {
    let mut text = String::new();
    match &node.data {
        NodeData::Text { contents } => text.push_str(&contents.borrow()),
        NodeData::Element { .. } | NodeData::Document | NodeData::Doctype { .. } => {
            for child in node.children.borrow().iter() {
                text.push_str(&extract_raw_text(child));
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
    }
    text
}

fn element_name(node: &Rc<Node>) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// `class` attribute of the parent element (VitePress puts the language on
/// the wrapping `<div>`)
fn parent_class(node: &Rc<Node>) -> Option<String> {
    let weak = node.parent.take();
    node.parent.set(weak.clone());
    let parent = weak?.upgrade()?;

    match &parent.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == "class")
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// `language-vue` → `vue`
fn language_from_class(class: &str) -> Option<String> {
    class
        .split_whitespace()
        .find_map(|c| c.strip_prefix("language-"))
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
}

/// Get attribute value from element
fn get_attr(attrs: &[html5ever::Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
        .filter(|v| !v.trim().is_empty())
}
