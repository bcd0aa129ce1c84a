//! HTML documentation page → Markdown conversion.
//!
//! Pipeline:
//! 1. Reduce the page to its primary content region and drop site chrome
//!    ([`main_content_extraction`])
//! 2. htmd conversion with custom element handlers ([`custom_handlers`])
//! 3. Streaming normalization of the resulting Markdown

pub mod custom_handlers;
pub mod main_content_extraction;
mod normalizer;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::MetaConfig;

pub use main_content_extraction::extract_main_content;

use custom_handlers::create_converter;
use normalizer::MarkdownNormalizer;

/// Converter bound to a content-region selector list
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    content_selectors: Arc<[String]>,
}

impl MarkdownConverter {
    #[must_use]
    pub fn new<I, S>(content_selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content_selectors: content_selectors.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn from_config(config: &MetaConfig) -> Self {
        Self::new(config.content_selectors().iter().cloned())
    }

    #[must_use]
    pub fn content_selectors(&self) -> &[String] {
        &self.content_selectors
    }

    /// Convert HTML to Markdown synchronously.
    ///
    /// # Errors
    ///
    /// Fails on oversized input, an invalid selector, or an htmd error.
    pub fn convert_sync(&self, html: &str) -> Result<String> {
        let region = extract_main_content(html, self.content_selectors())
            .context("failed to extract content region")?;

        let raw_markdown = create_converter()
            .convert(&region)
            .context("htmd conversion failed")?;

        let markdown = MarkdownNormalizer::normalize(&raw_markdown);
        log::debug!(
            "Converted {} bytes of HTML into {} bytes of Markdown",
            html.len(),
            markdown.len()
        );
        Ok(markdown)
    }

    /// Convert HTML to Markdown on the blocking pool.
    ///
    /// # Errors
    ///
    /// Same as [`convert_sync`](Self::convert_sync), plus a panicked task.
    pub async fn convert(&self, html: &str) -> Result<String> {
        let html = Arc::<str>::from(html);
        let converter = self.clone();

        tokio::task::spawn_blocking(move || converter.convert_sync(&html))
            .await
            .map_err(|e| anyhow::anyhow!("MarkdownConverter task panicked: {e}"))?
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::from_config(&MetaConfig::default())
    }
}

/// Convenience wrapper over [`MarkdownConverter::convert_sync`]
///
/// # Errors
///
/// See [`MarkdownConverter::convert_sync`].
pub fn convert_html_to_markdown<S: AsRef<str>>(html: &str, content_selectors: &[S]) -> Result<String> {
    MarkdownConverter::new(content_selectors.iter().map(|s| s.as_ref().to_string())).convert_sync(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<!DOCTYPE html>
<html><head><title>Button</title><script>window.x = 1</script></head>
<body>
  <nav class="VPNav">Home | Guide</nav>
  <aside class="VPSidebar">Sidebar</aside>
  <main class="main">
    <div class="vp-doc">
      <h1 id="button">Button 按钮 <a class="header-anchor" href="#button">&#8203;</a></h1>
      <h2 id="attributes">Attributes <a class="header-anchor" href="#attributes">&#8203;</a></h2>
      <table>
        <thead><tr><th>参数</th><th>说明</th><th>类型</th><th>可选值</th><th>默认值</th><th>最低版本</th></tr></thead>
        <tbody>
          <tr><td>type</td><td>按钮类型</td><td>string</td><td>primary / success</td><td>primary</td><td>-</td></tr>
        </tbody>
      </table>
      <h2 id="events">Events <a class="header-anchor" href="#events">&#8203;</a></h2>
      <table>
        <thead><tr><th>事件名称</th><th>说明</th><th>参数</th><th>最低版本</th></tr></thead>
        <tbody><tr><td>click</td><td>点击事件</td><td>event</td><td>-</td></tr></tbody>
      </table>
    </div>
  </main>
  <footer class="VPFooter">Released under the MIT License.</footer>
</body></html>"##;

    #[test]
    fn test_documentation_page_to_markdown() -> Result<()> {
        let md = MarkdownConverter::default().convert_sync(PAGE)?;

        assert!(md.contains("# Button 按钮"), "Got: {md}");
        assert!(md.lines().any(|l| l == "## Attributes"), "Got: {md}");
        assert!(md.contains("| type | 按钮类型 | string | primary / success | primary | - |"));
        assert!(md.lines().any(|l| l == "## Events"));
        for chrome in ["Sidebar", "Home | Guide", "MIT License", "window.x", "\u{200B}"] {
            assert!(!md.contains(chrome), "{chrome:?} leaked into: {md}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_async_matches_sync() -> Result<()> {
        let converter = MarkdownConverter::default();
        assert_eq!(converter.convert(PAGE).await?, converter.convert_sync(PAGE)?);
        Ok(())
    }

    #[test]
    fn test_wrapper_uses_given_selectors() -> Result<()> {
        let md = convert_html_to_markdown(PAGE, &["footer"])?;
        assert!(md.contains("Released under the MIT License."), "Got: {md}");
        Ok(())
    }
}
