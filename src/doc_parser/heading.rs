//! Section heading location.
//!
//! A section such as `Attributes` is found by trying an ordered list of
//! matchers, strongest first. The first one that matches wins and weaker ones
//! are never consulted:
//!
//! 1. [`HeadingStrategy::Exact`]: `## TableCol Attributes`
//! 2. [`HeadingStrategy::Fuzzy`]: `## TableColumn Attributes`
//! 3. [`HeadingStrategy::General`]: `## Attributes`
//!
//! Without a component name only the general matcher is built.

use regex::Regex;

use crate::utils::to_pascal_case;

/// Which matcher located a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStrategy {
    Exact,
    Fuzzy,
    General,
}

/// A located heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMatch {
    pub strategy: HeadingStrategy,
    /// Byte offset of the `#` that opens the heading line
    pub heading_start: usize,
    /// Byte offset where the heading line ends (before its newline)
    pub offset: usize,
}

/// Compiled matcher list for one (section, component) pair
#[derive(Debug, Clone)]
pub struct HeadingLocator {
    matchers: Vec<(HeadingStrategy, Regex)>,
}

impl HeadingLocator {
    /// Build the matcher list.
    ///
    /// `section_title` is matched literally (regex metacharacters escaped);
    /// `component` is a kebab-case name like `table-col`.
    pub fn new(section_title: &str, component: Option<&str>) -> Self {
        let title = regex::escape(section_title);
        let mut matchers = Vec::with_capacity(3);

        if let Some(component) = component.filter(|c| !c.trim().is_empty()) {
            let pascal = regex::escape(&to_pascal_case(component.trim()));
            matchers.push((
                HeadingStrategy::Exact,
                heading_regex(&format!("{pascal}[ \\t]+{title}")),
            ));
            matchers.push((
                HeadingStrategy::Fuzzy,
                heading_regex(&format!("[^\\r\\n]*?{pascal}[^\\r\\n]*?[ \\t]+{title}")),
            ));
        }

        matchers.push((HeadingStrategy::General, heading_regex(&title)));

        Self { matchers }
    }

    /// Strategies in the order they will be tried
    pub fn strategies(&self) -> impl Iterator<Item = HeadingStrategy> + '_ {
        self.matchers.iter().map(|(strategy, _)| *strategy)
    }

    /// Find the heading in `text`.
    pub fn locate(&self, text: &str) -> Option<SectionMatch> {
        self.matchers.iter().find_map(|(strategy, re)| {
            re.find(text).map(|m| SectionMatch {
                strategy: *strategy,
                heading_start: m.start(),
                offset: m.end(),
            })
        })
    }
}

/// Level-2 or level-3 heading whose text is exactly `body`, case-insensitive,
/// matched on one line.
fn heading_regex(body: &str) -> Regex {
    let pattern = format!(r"(?im)^#{{2,3}}[ \t]*{body}[ \t]*\r?$");
    // Both parts of the pattern are escaped literals or fixed fragments.
    Regex::new(&pattern).expect("BUG: heading pattern built from escaped input is invalid")
}

/// Convenience wrapper: offset after the matching heading line.
pub fn locate_section(text: &str, section_title: &str, component: Option<&str>) -> Option<SectionMatch> {
    HeadingLocator::new(section_title, component).locate(text)
}
