//! Shared configuration constants for wotdoc
//!
//! This module contains the fixed values the extractor runs with. Nothing here
//! is read from the environment; `MetaConfig` copies these as its defaults.

use std::time::Duration;

/// Base URL of the hosted component documentation.
///
/// Canonical pages live at `<DOC_HOST>/component/<name>.html`.
pub const DOC_HOST: &str = "https://wot-design-uni.cn";

/// Network fetch abort threshold: 5 seconds
///
/// A documentation page is a few hundred KB at most. Anything slower than
/// this is treated as a network failure and the local copy is used instead.
pub const NETWORK_TIMEOUT: Duration = Duration::from_secs(5);

/// Primary content selectors, tried in order.
///
/// 1. `main` - semantic main element
/// 2. `.content-container` - the documentation site's content container
/// 3. `.vp-doc` - VitePress rendered markdown region
/// 4. `body` - last resort
pub const CONTENT_SELECTORS: &[&str] = &["main", ".content-container", ".vp-doc", "body"];

/// Directory holding the bundled `<component>.md` files, relative to the
/// install location.
pub const DOCS_DIR: &str = "docs/component";

/// Prefix of every component tag (`button` → `wd-button`).
pub const TAG_PREFIX: &str = "wd-";

/// Browser-like user agent for documentation fetches
///
/// Some CDN front-ends serve a bot challenge page to unknown agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Section titles as they appear in the component documents.
pub const SECTION_ATTRIBUTES: &str = "Attributes";
pub const SECTION_EVENTS: &str = "Events";
pub const SECTION_SLOT: &str = "Slot";
pub const SECTION_SLOTS: &str = "Slots";
pub const SECTION_EXTERNAL_CLASSES: &str = "外部样式类";

/// Heading suffix marking an auxiliary record definition (`## Action 数据结构`).
pub const DATA_STRUCTURE_SUFFIX: &str = "数据结构";

/// Note appended to descriptions of props reachable through `v-model`.
pub const BINDING_NOTE: &str = "\n\n> 该属性支持 `v-model` 双向绑定";

/// Largest documentation payload accepted from the network (10 MB)
pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;
