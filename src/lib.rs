//! # serp-extract
//!
//! Extraction engine for structured search-result records (title, URL,
//! description) from a rendered search-results page whose markup is only
//! partially stable.
//!
//! The same logical result can appear under several tag/class combinations,
//! and chrome elements (pagination, "more results", related searches)
//! satisfy naive selector matches. The engine handles both with ordered
//! selector fallback chains, container-scoped field resolution, a two-phase
//! link strategy with a navigational-link filter, and redirect-wrapper URL
//! normalization. One malformed result block never drops the rest of the
//! page.
//!
//! ## Quick Start
//!
//! ```rust
//! use serp_extract::{extract, SelectorConfig};
//!
//! let html = r#"<div class="g">
//!   <a href="/url?q=https://example.org/&sa=U"><h3>Example</h3></a>
//!   <div class="VwiC3b">A snippet.</div>
//! </div>"#;
//!
//! let records = extract(html, &SelectorConfig::default());
//! assert_eq!(records[0].url, "https://example.org/");
//! ```
//!
//! The engine is read-only and stateless per call; the host process that
//! drives a browser, spoofs fingerprints, or simulates input is a separate
//! concern and only hands over the rendered page.

mod error;
mod extract;

/// Extraction configuration: selector chains and URL normalization settings.
pub mod config;

/// Link candidate filtering and two-phase link resolution.
pub mod links;

/// Output record types.
pub mod result;

/// The NodeScope page abstraction and its dom_query-backed implementation.
pub mod scope;

/// Selector fallback-chain resolution.
pub mod selector;

/// Redirect-wrapper resolution and URL absolutization.
pub mod url_utils;

// Public API - re-exports
pub use config::{LinkSelector, SelectorConfig};
pub use error::{Error, Result};
pub use extract::extract_results as extract_from_scope;
pub use result::SearchResultRecord;
pub use scope::{DomScope, NodeScope};

/// Extracts search-result records from an HTML string.
///
/// Parses the page, wraps it in the production [`DomScope`], and runs the
/// extraction engine. Extraction itself never fails; a page with no
/// recognizable result containers yields an empty list.
///
/// # Example
///
/// ```rust
/// use serp_extract::{extract, SelectorConfig};
///
/// let records = extract("<p>no results markup</p>", &SelectorConfig::default());
/// assert!(records.is_empty());
/// ```
#[must_use]
pub fn extract(html: &str, config: &SelectorConfig) -> Vec<SearchResultRecord> {
    let doc = scope::parse(html);
    let scope = DomScope::new(&doc);
    extract::extract_results(&scope, config)
}
