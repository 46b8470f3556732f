//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// One extracted search result.
///
/// A record is only ever built when both title and link resolution
/// succeeded, so `title` and `url` are always non-empty. `description` is
/// `""` when no description node was found in the container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultRecord {
    /// Result title, whitespace-trimmed.
    pub title: String,

    /// Absolute result URL, redirect wrappers resolved.
    pub url: String,

    /// Result snippet text, possibly empty.
    pub description: String,
}
