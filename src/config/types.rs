//! Core configuration type for documentation extraction
//!
//! `MetaConfig` carries the fixed constant set the extractor runs with: where
//! canonical pages live, how long to wait for them, which HTML regions hold
//! the content, and where the bundled Markdown copies are installed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::{CONTENT_SELECTORS, DOC_HOST, DOCS_DIR, NETWORK_TIMEOUT, TAG_PREFIX, USER_AGENT};

/// Configuration for content acquisition and schema assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaConfig {
    /// Base URL for canonical pages: absolute http(s), no trailing slash
    /// (checked in builder).
    pub(crate) doc_host: String,

    /// Fetch abort threshold
    pub(crate) network_timeout: Duration,

    /// Ordered HTML selector fallbacks for the primary content region
    pub(crate) content_selectors: Vec<String>,

    /// Directory holding `<name>.md` copies
    pub(crate) docs_dir: PathBuf,

    /// Prefix prepended to component names to form tags
    pub(crate) tag_prefix: String,

    pub(crate) user_agent: String,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            doc_host: DOC_HOST.to_string(),
            network_timeout: NETWORK_TIMEOUT,
            content_selectors: CONTENT_SELECTORS.iter().map(|s| (*s).to_string()).collect(),
            docs_dir: PathBuf::from(DOCS_DIR),
            tag_prefix: TAG_PREFIX.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl MetaConfig {
    #[must_use]
    pub fn doc_host(&self) -> &str {
        &self.doc_host
    }

    #[must_use]
    pub fn network_timeout(&self) -> Duration {
        self.network_timeout
    }

    #[must_use]
    pub fn content_selectors(&self) -> &[String] {
        &self.content_selectors
    }

    #[must_use]
    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    #[must_use]
    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Canonical page URL: `<doc_host>/component/<name>.html`
    ///
    /// # Examples
    /// ```
    /// # use wotdoc_meta::config::MetaConfig;
    /// let config = MetaConfig::default();
    /// assert_eq!(
    ///     config.doc_url("table"),
    ///     "https://wot-design-uni.cn/component/table.html"
    /// );
    /// ```
    #[must_use]
    pub fn doc_url(&self, name: &str) -> String {
        format!(
            "{}/component/{}.html",
            self.doc_host,
            urlencoding::encode(name)
        )
    }

    /// Local copy path: `<docs_dir>/<name>.md`
    #[must_use]
    pub fn local_doc_path(&self, name: &str) -> PathBuf {
        self.docs_dir.join(format!("{name}.md"))
    }

    /// `button` → `wd-button`
    #[must_use]
    pub fn tag_for(&self, component_name: &str) -> String {
        format!("{}{}", self.tag_prefix, component_name)
    }

    /// `wd-button` → `button`; names without the prefix are returned as-is.
    #[must_use]
    pub fn component_name_for<'a>(&self, tag: &'a str) -> &'a str {
        tag.strip_prefix(self.tag_prefix.as_str()).unwrap_or(tag)
    }
}
