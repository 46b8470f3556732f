//! Selector fallback chains.
//!
//! The same "try selector 1, else 2, else 3" pattern drives container
//! discovery and every per-field lookup, so it is implemented once as
//! [`first_match`] and specialized by the matcher closure. Chains are
//! strictly first-match-wins: once an entry succeeds, later entries are
//! never evaluated, and matches from different entries are never combined.

use tracing::{debug, warn};

use crate::error::Result;
use crate::scope::NodeScope;

/// Walk `candidates` in order, returning the first `Some` the matcher
/// produces. Matcher errors propagate and stop the walk.
pub fn first_match<C, T>(
    candidates: &[C],
    mut matcher: impl FnMut(&C) -> Result<Option<T>>,
) -> Result<Option<T>> {
    for candidate in candidates {
        if let Some(found) = matcher(candidate)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// Discover result containers under `root`.
///
/// The first selector in the chain that yields at least one match wins; its
/// matches become the container sequence in document order. A selector the
/// scope cannot evaluate is logged and treated as a miss so the chain can
/// fall through. No selector matching at all is not an error: the result is
/// simply empty.
#[must_use]
pub fn resolve_containers<S: NodeScope>(
    scope: &S,
    root: &S::Node,
    chain: &[String],
) -> Vec<S::Node> {
    let resolved = first_match(chain, |selector| {
        let nodes = match scope.find_all(root, selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                warn!(selector = %selector, error = %err, "container selector failed, trying next");
                return Ok(None);
            }
        };
        if nodes.is_empty() {
            Ok(None)
        } else {
            debug!(selector = %selector, count = nodes.len(), "found result containers");
            Ok(Some(nodes))
        }
    });
    match resolved {
        Ok(Some(nodes)) => nodes,
        _ => Vec::new(),
    }
}

/// Resolve one field within a container.
///
/// Each chain entry is queried strictly against the container's subtree; the
/// first entry with a match wins. `Ok(None)` is the selector-miss case, an
/// absent field rather than an error.
pub fn resolve_field<S: NodeScope>(
    scope: &S,
    container: &S::Node,
    chain: &[String],
) -> Result<Option<S::Node>> {
    first_match(chain, |selector| scope.find_first(container, selector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::{parse, DomScope};

    #[test]
    fn containers_first_matching_selector_wins() {
        let doc = parse(
            r#"<div class="result">one</div>
               <div class="result">two</div>
               <div class="g">should not be reached</div>"#,
        );
        let scope = DomScope::new(&doc);
        let root = scope.root();

        let chain = vec!["div.missing".to_string(), "div.result".to_string(), "div.g".to_string()];
        let containers = resolve_containers(&scope, &root, &chain);

        assert_eq!(containers.len(), 2);
        assert_eq!(scope.text(&containers[0]), "one".into());
        assert_eq!(scope.text(&containers[1]), "two".into());
    }

    #[test]
    fn containers_never_merge_across_selectors() {
        let doc = parse(r#"<div class="a">A</div><div class="b">B</div>"#);
        let scope = DomScope::new(&doc);
        let root = scope.root();

        let chain = vec!["div.a".to_string(), "div.b".to_string()];
        let containers = resolve_containers(&scope, &root, &chain);

        assert_eq!(containers.len(), 1);
        assert_eq!(scope.text(&containers[0]), "A".into());
    }

    #[test]
    fn containers_empty_when_nothing_matches() {
        let doc = parse("<p>no containers here</p>");
        let scope = DomScope::new(&doc);
        let root = scope.root();

        let chain = vec!["div.g".to_string()];
        assert!(resolve_containers(&scope, &root, &chain).is_empty());
    }

    #[test]
    fn field_resolution_is_container_scoped() {
        let doc = parse(
            r#"<h3>outside</h3>
               <div id="c"><h3>inside</h3></div>"#,
        );
        let scope = DomScope::new(&doc);
        let root = scope.root();
        let container = match scope.find_first(&root, "#c") {
            Ok(Some(node)) => node,
            other => panic!("expected container, got {other:?}"),
        };

        let chain = vec!["h3".to_string()];
        let field = match resolve_field(&scope, &container, &chain) {
            Ok(Some(node)) => node,
            other => panic!("expected title node, got {other:?}"),
        };
        assert_eq!(scope.text(&field), "inside".into());
    }

    #[test]
    fn field_falls_back_in_order() {
        let doc = parse(r#"<div id="c"><span class="alt">fallback title</span></div>"#);
        let scope = DomScope::new(&doc);
        let root = scope.root();
        let container = match scope.find_first(&root, "#c") {
            Ok(Some(node)) => node,
            other => panic!("expected container, got {other:?}"),
        };

        let chain = vec!["h3".to_string(), "span.alt".to_string()];
        let field = match resolve_field(&scope, &container, &chain) {
            Ok(Some(node)) => node,
            other => panic!("expected fallback node, got {other:?}"),
        };
        assert_eq!(scope.text(&field), "fallback title".into());
    }
}
