//! Fluent builder for `MetaConfig`
//!
//! Every field has a default, so `build()` only validates: the doc host must
//! be an absolute http(s) URL and each content selector must parse.

use scraper::Selector;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use super::types::MetaConfig;
use crate::errors::{DocError, DocResult};

#[derive(Debug, Clone, Default)]
pub struct MetaConfigBuilder {
    pub(crate) config: MetaConfig,
}

impl MetaConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn doc_host(mut self, host: impl Into<String>) -> Self {
        self.config.doc_host = host.into();
        self
    }

    #[must_use]
    pub fn network_timeout(mut self, timeout: Duration) -> Self {
        self.config.network_timeout = timeout;
        self
    }

    #[must_use]
    pub fn network_timeout_ms(self, millis: u64) -> Self {
        self.network_timeout(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn content_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.content_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn docs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.docs_dir = dir.into();
        self
    }

    #[must_use]
    pub fn tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.tag_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Validate and produce the config.
    ///
    /// # Errors
    ///
    /// Returns `DocError::Config` if the doc host is not an absolute http(s)
    /// URL, the selector list is empty, or a selector does not parse.
    pub fn build(mut self) -> DocResult<MetaConfig> {
        let host = self.config.doc_host.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&host)
            .map_err(|e| DocError::Config(format!("invalid doc host '{host}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DocError::Config(format!(
                "doc host must be http(s), got '{}'",
                parsed.scheme()
            )));
        }
        self.config.doc_host = host;

        if self.config.content_selectors.is_empty() {
            return Err(DocError::Config("content selector list is empty".into()));
        }
        for sel in &self.config.content_selectors {
            Selector::parse(sel)
                .map_err(|e| DocError::Config(format!("invalid content selector '{sel}': {e}")))?;
        }

        if self.config.network_timeout.is_zero() {
            return Err(DocError::Config("network timeout must be non-zero".into()));
        }

        Ok(self.config)
    }
}

impl MetaConfig {
    /// Start a builder seeded with the fixed defaults
    #[must_use]
    pub fn builder() -> MetaConfigBuilder {
        MetaConfigBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = MetaConfig::builder().build().expect("defaults are valid");
        assert_eq!(config, MetaConfig::default());
        assert_eq!(config.content_selectors()[0], "main");
        assert_eq!(config.content_selectors().last().map(String::as_str), Some("body"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = MetaConfig::builder()
            .doc_host("http://127.0.0.1:1234/")
            .build()
            .expect("valid host");
        assert_eq!(config.doc_url("cell"), "http://127.0.0.1:1234/component/cell.html");
    }

    #[test]
    fn test_rejects_bad_host() {
        assert!(matches!(
            MetaConfig::builder().doc_host("not a url").build(),
            Err(DocError::Config(_))
        ));
        assert!(matches!(
            MetaConfig::builder().doc_host("ftp://docs.example.com").build(),
            Err(DocError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_bad_selector() {
        let result = MetaConfig::builder()
            .content_selectors(["main", "div[["])
            .build();
        assert!(matches!(result, Err(DocError::Config(msg)) if msg.contains("div[[")));
    }

    #[test]
    fn test_local_path_and_tags() {
        let config = MetaConfig::builder()
            .docs_dir("/opt/docs")
            .build()
            .expect("valid");
        assert_eq!(config.local_doc_path("table"), PathBuf::from("/opt/docs/table.md"));
        assert_eq!(config.tag_for("table-col"), "wd-table-col");
        assert_eq!(config.component_name_for("wd-table-col"), "table-col");
        assert_eq!(config.component_name_for("table-col"), "table-col");
    }
}
