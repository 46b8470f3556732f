//! Result assembly.
//!
//! Orchestrates one extraction run: discover containers, resolve each
//! container's title, link, and description, normalize the link URL, and
//! collect records in document order. Failures are isolated per container:
//! one malformed result block is logged and skipped, never aborting the
//! batch. The only externally visible failure mode is a shorter output
//! list.

use tracing::{debug, warn};

use crate::config::SelectorConfig;
use crate::error::Result;
use crate::links;
use crate::result::SearchResultRecord;
use crate::scope::NodeScope;
use crate::selector;
use crate::url_utils;

/// Run extraction against a page scope.
///
/// The container list is materialized up front; containers that yield no
/// title or no accepted link are absent from the output, and containers
/// whose field reads fail are skipped with a warning. Record order follows
/// container document order.
#[must_use]
pub fn extract_results<S: NodeScope>(scope: &S, config: &SelectorConfig) -> Vec<SearchResultRecord> {
    let root = scope.root();
    let containers = selector::resolve_containers(scope, &root, &config.container_selectors);
    debug!(count = containers.len(), "discovered result containers");

    let mut records = Vec::with_capacity(containers.len());
    for (index, container) in containers.iter().enumerate() {
        match extract_one(scope, container, config) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => debug!(index, "container skipped: no title or link"),
            Err(err) => warn!(index, error = %err, "container skipped: field extraction failed"),
        }
    }

    debug!(count = records.len(), "extraction finished");
    records
}

/// Per-container boundary: resolve fields and build one record.
///
/// `Ok(None)` means the container produced no record (missing title or
/// link); `Err` means a field read failed and the caller should skip this
/// container only.
fn extract_one<S: NodeScope>(
    scope: &S,
    container: &S::Node,
    config: &SelectorConfig,
) -> Result<Option<SearchResultRecord>> {
    let title = selector::resolve_field(scope, container, &config.title_selectors)?;
    let link = links::resolve_link(
        scope,
        container,
        title.as_ref(),
        &config.link_selectors,
        &config.redirect_prefix,
    )?;
    let (Some(title), Some(link)) = (title, link) else {
        return Ok(None);
    };

    let title_text = scope.text(&title).trim().to_string();
    if title_text.is_empty() {
        return Ok(None);
    }

    let raw_href = scope.attr(&link, "href").unwrap_or_default();
    let url = url_utils::normalize(&raw_href, &config.redirect_prefix, &config.base_url);
    if url.is_empty() {
        return Ok(None);
    }

    let description = match selector::resolve_field(scope, container, &config.description_selectors)? {
        Some(node) => scope.text(&node).trim().to_string(),
        None => String::new(),
    };

    Ok(Some(SearchResultRecord {
        title: title_text,
        url,
        description,
    }))
}
