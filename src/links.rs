//! Link resolution within a result container.
//!
//! Links are resolved in two phases. Phase A walks upward from the resolved
//! title node to its nearest enclosing anchor, the title-wrapped-in-link
//! pattern that covers the overwhelming majority of result markup. Phase B
//! scans the container's anchors against a pattern and takes the first one
//! that survives the candidate filter. The configured chain mixes both kinds
//! of entry; the first entry of either kind to produce an accepted anchor
//! wins and the remainder of the chain is skipped.

use tracing::debug;

use crate::config::LinkSelector;
use crate::error::Result;
use crate::scope::NodeScope;

/// Visible link text containing any of these phrases marks page chrome
/// ("more results", pagination, related searches), not a result link.
/// Matching is intentionally substring-based, mirroring the behavior this
/// engine replaces.
const NAV_PHRASES: &[&str] = &[
    "more", "related", "next", "previous", "更多", "相关", "上一页",
];

/// Heuristic predicate separating genuine result links from chrome.
///
/// Rejects empty and fragment-only hrefs, script pseudo-scheme hrefs,
/// in-page anchors (fragment-carrying hrefs that are neither absolute nor
/// redirect wrappers), and anchors whose visible text matches the
/// navigational-phrase blocklist.
#[must_use]
pub fn is_valid_candidate(href: &str, link_text: &str, redirect_prefix: &str) -> bool {
    if href.is_empty() || href == "#" || href.starts_with("javascript:") {
        return false;
    }

    // Fragment-carrying hrefs are in-page anchors unless they are absolute
    // URLs or wrapped redirect links. An empty prefix must not make every
    // href count as redirect-wrapped.
    let redirect_wrapped = !redirect_prefix.is_empty() && href.starts_with(redirect_prefix);
    if href.contains('#') && !href.starts_with("http") && !redirect_wrapped {
        return false;
    }

    let text = link_text.trim().to_lowercase();
    !NAV_PHRASES.iter().any(|phrase| text.contains(phrase))
}

/// Resolve a container's link by walking the configured chain.
///
/// Returns the accepted anchor node, or `None` when no entry produced one,
/// in which case the container is treated as link-less.
pub fn resolve_link<S: NodeScope>(
    scope: &S,
    container: &S::Node,
    title: Option<&S::Node>,
    chain: &[LinkSelector],
    redirect_prefix: &str,
) -> Result<Option<S::Node>> {
    for entry in chain {
        match entry {
            LinkSelector::AncestorAnchor => {
                if let Some(anchor) = ancestor_anchor(scope, container, title) {
                    return Ok(Some(anchor));
                }
            }
            LinkSelector::CandidatePattern(pattern) => {
                if let Some(anchor) = scan_candidates(scope, container, pattern, redirect_prefix)? {
                    return Ok(Some(anchor));
                }
            }
        }
    }
    Ok(None)
}

/// Phase A: nearest enclosing anchor of the title node.
///
/// Accepted only with a non-empty href and only when the anchor lies inside
/// the current container; a title nested in markup belonging to an outer
/// region must not contribute its link.
fn ancestor_anchor<S: NodeScope>(
    scope: &S,
    container: &S::Node,
    title: Option<&S::Node>,
) -> Option<S::Node> {
    let title = title?;
    let anchor = scope.closest(title, "a")?;
    let has_href = scope.attr(&anchor, "href").is_some_and(|href| !href.is_empty());
    if has_href && scope.contains(container, &anchor) {
        Some(anchor)
    } else {
        None
    }
}

/// Phase B: first anchor matching `pattern` that passes the candidate
/// filter, in document order.
fn scan_candidates<S: NodeScope>(
    scope: &S,
    container: &S::Node,
    pattern: &str,
    redirect_prefix: &str,
) -> Result<Option<S::Node>> {
    for anchor in scope.find_all(container, pattern)? {
        let Some(href) = scope.attr(&anchor, "href") else {
            continue;
        };
        let text = scope.text(&anchor);
        if is_valid_candidate(&href, &text, redirect_prefix) {
            return Ok(Some(anchor));
        }
        debug!(href = %href, "rejected link candidate");
    }
    Ok(None)
}
