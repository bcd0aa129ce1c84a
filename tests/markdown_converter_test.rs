//! HTML → Markdown conversion of documentation pages

mod common;

use wotdoc_meta::doc_parser::{extract_doc_fields, extract_props, FieldSection};
use wotdoc_meta::markdown_converter::convert_html_to_markdown;
use wotdoc_meta::{MarkdownConverter, PropType};

const SELECTORS: &[&str] = &["main", ".content-container", ".vp-doc", "body"];

/// Code blocks keep their newlines and indentation
#[test]
fn test_code_block_preserves_newlines() -> anyhow::Result<()> {
    let page = common::create_doc_page(
        "Cell 单元格",
        r#"<div class="language-vue"><pre><code>&lt;wd-cell-group&gt;
    &lt;wd-cell title="标题" /&gt;
&lt;/wd-cell-group&gt;</code></pre></div>"#,
    );
    let markdown = convert_html_to_markdown(&page, SELECTORS)?;

    assert!(
        markdown.contains("```vue\n<wd-cell-group>\n    <wd-cell title=\"标题\" />\n</wd-cell-group>\n```"),
        "Code should keep its layout, got: {markdown:?}"
    );
    Ok(())
}

#[test]
fn test_pre_without_code_preserves_whitespace() -> anyhow::Result<()> {
    let markdown = convert_html_to_markdown("<pre>Line 1\nLine 2\n    Indented line 3</pre>", SELECTORS)?;
    assert!(markdown.contains("Line 1\nLine 2\n    Indented line 3"), "Got: {markdown:?}");
    Ok(())
}

#[test]
fn test_navigation_outside_region_is_dropped() -> anyhow::Result<()> {
    let page = common::create_doc_page("Tag 标签", "<p>用于标记和选择。</p>");
    let markdown = convert_html_to_markdown(&page, SELECTORS)?;

    assert!(markdown.starts_with("# Tag 标签"), "Got: {markdown:?}");
    assert!(markdown.contains("用于标记和选择。"));
    assert!(!markdown.contains("导航"));
    Ok(())
}

/// Converted tables feed straight into the section parser
#[tokio::test]
async fn test_converted_page_parses() -> anyhow::Result<()> {
    let page = common::create_doc_page(
        "Switch 开关",
        r##"<h2 id="attributes">Attributes <a class="header-anchor" href="#attributes">&#8203;</a></h2>
<table>
  <thead><tr><th>参数</th><th>说明</th><th>类型</th><th>可选值</th><th>默认值</th><th>最低版本</th></tr></thead>
  <tbody>
    <tr><td>v-model</td><td>绑定值</td><td>boolean / string / number</td><td>-</td><td>-</td><td>-</td></tr>
    <tr><td>size</td><td>尺寸</td><td>string</td><td>small / large</td><td>-</td><td>-</td></tr>
    <tr><td>disabled</td><td>禁用</td><td>boolean</td><td>-</td><td>false</td><td>-</td></tr>
  </tbody>
</table>
<h2 id="events">Events</h2>
<table>
  <thead><tr><th>事件名称</th><th>说明</th><th>参数</th><th>最低版本</th></tr></thead>
  <tbody><tr><td>change</td><td>值修改时触发</td><td><code>{ value }</code></td><td>-</td></tr></tbody>
</table>"##,
    );

    let markdown = MarkdownConverter::new(SELECTORS.iter().copied())
        .convert(&page)
        .await?;

    let props = extract_props(&markdown, "Attributes", None);
    let names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["v-model", "model-value", "modelValue", "size", "disabled"]);
    assert_eq!(
        props[3].kind,
        PropType::Enum(vec!["small".into(), "large".into()])
    );
    assert_eq!(props[4].kind, PropType::Boolean);

    let events = extract_doc_fields(&markdown, "Events", None, FieldSection::Events);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "change");
    Ok(())
}
