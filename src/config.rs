//! Extraction configuration.
//!
//! `SelectorConfig` carries the ordered selector fallback chains for
//! containers, titles, links, and descriptions, plus the URL normalization
//! settings. It deserializes from the nested mapping shape the host
//! automation process hands over:
//!
//! ```json
//! {
//!   "selectors": {
//!     "result_container": { "primary": ["div.g"] },
//!     "title":            { "selectors": ["h3", "h3 span"] },
//!     "url":              { "selectors": ["closest", "a[href]"] },
//!     "description":      { "selectors": ["div.VwiC3b"] }
//!   },
//!   "extraction": {
//!     "url_redirect_prefix": "/url?q=",
//!     "base_url": "https://www.google.com"
//!   }
//! }
//! ```
//!
//! The `"closest"` sentinel in the url chain selects the ancestor-anchor
//! strategy; every other entry is a scoped candidate-scan pattern.

use serde::Deserialize;

/// One entry of the link-resolution chain.
///
/// Entries are tried in order; the first entry of either kind that produces
/// an accepted anchor wins and the rest of the chain is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkSelector {
    /// Walk upward from the resolved title node to its nearest enclosing
    /// anchor (self-inclusive, bounded by the container).
    AncestorAnchor,

    /// Scan all anchors matching this pattern within the container and take
    /// the first that passes the link-candidate filter.
    CandidatePattern(String),
}

/// Declarative configuration for one extraction run.
///
/// Immutable for the duration of a run; each chain is evaluated
/// first-match-wins with no merging across entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawConfig")]
pub struct SelectorConfig {
    /// Candidate selectors for result containers, document-scoped.
    pub container_selectors: Vec<String>,

    /// Candidate selectors for the title node, container-scoped.
    pub title_selectors: Vec<String>,

    /// Link-resolution chain, mixed ancestor-anchor and scan entries.
    pub link_selectors: Vec<LinkSelector>,

    /// Candidate selectors for the description node, container-scoped.
    pub description_selectors: Vec<String>,

    /// Path prefix marking an href as a redirect wrapper around a `q`
    /// query parameter.
    pub redirect_prefix: String,

    /// Origin prepended to relative result URLs.
    pub base_url: String,
}

impl Default for SelectorConfig {
    /// Selector set matching the Google SERP layout the engine was
    /// originally deployed against.
    fn default() -> Self {
        Self {
            container_selectors: vec!["div.g".to_string()],
            title_selectors: vec!["h3".to_string(), "h3 span".to_string()],
            link_selectors: vec![
                LinkSelector::AncestorAnchor,
                LinkSelector::CandidatePattern("a[href^='/url?']".to_string()),
                LinkSelector::CandidatePattern("a[href]".to_string()),
            ],
            description_selectors: vec![
                "div.VwiC3b".to_string(),
                "div.s".to_string(),
                "span.st".to_string(),
            ],
            redirect_prefix: "/url?q=".to_string(),
            base_url: "https://www.google.com".to_string(),
        }
    }
}

// Wire shape of the nested configuration mapping.

#[derive(Debug, Deserialize)]
struct RawConfig {
    selectors: RawSelectors,
    extraction: RawExtraction,
}

#[derive(Debug, Deserialize)]
struct RawSelectors {
    result_container: RawContainer,
    title: RawChain,
    url: RawChain,
    description: RawChain,
}

#[derive(Debug, Deserialize)]
struct RawContainer {
    primary: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawChain {
    selectors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawExtraction {
    url_redirect_prefix: String,
    base_url: String,
}

impl From<RawConfig> for SelectorConfig {
    fn from(raw: RawConfig) -> Self {
        let link_selectors = raw
            .selectors
            .url
            .selectors
            .into_iter()
            .map(|entry| {
                // The original configuration marks the ancestor-anchor
                // strategy with a "closest" sentinel entry.
                if entry.contains("closest") {
                    LinkSelector::AncestorAnchor
                } else {
                    LinkSelector::CandidatePattern(entry)
                }
            })
            .collect();

        Self {
            container_selectors: raw.selectors.result_container.primary,
            title_selectors: raw.selectors.title.selectors,
            link_selectors,
            description_selectors: raw.selectors.description.selectors,
            redirect_prefix: raw.extraction.url_redirect_prefix,
            base_url: raw.extraction.base_url,
        }
    }
}
