//! Page-scope abstraction.
//!
//! The engine never touches a rendering engine directly: every query goes
//! through [`NodeScope`], a small read-only view of "a queryable region of a
//! page tree". Production code uses [`DomScope`], backed by the `dom_query`
//! crate; tests can substitute instrumented or failing scopes.

use dom_query::Selection;

use crate::error::Result;

// Re-export core types for external use
pub use dom_query::Document;
pub use tendril::StrTendril;

/// Read-only queryable view of a page tree.
///
/// All methods are scoped: `find_all` and `find_first` match only within the
/// given node's subtree. Implementations must return matches in document
/// order and must not mutate the underlying tree.
pub trait NodeScope {
    /// Handle to one node of the page tree.
    type Node: Clone;

    /// The document-level node queries start from.
    fn root(&self) -> Self::Node;

    /// All descendants of `node` matching `selector`, in document order.
    fn find_all(&self, node: &Self::Node, selector: &str) -> Result<Vec<Self::Node>>;

    /// First descendant of `node` matching `selector`, if any.
    fn find_first(&self, node: &Self::Node, selector: &str) -> Result<Option<Self::Node>>;

    /// Nearest ancestor of `node` (including `node` itself) with the given
    /// tag name.
    fn closest(&self, node: &Self::Node, tag: &str) -> Option<Self::Node>;

    /// Whether `node` lies within the subtree rooted at `ancestor`
    /// (self-inclusive).
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Attribute value of `node`, if present.
    ///
    /// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only
    /// when you need owned storage.
    fn attr(&self, node: &Self::Node, name: &str) -> Option<StrTendril>;

    /// Concatenated text content of `node` and its descendants.
    ///
    /// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only
    /// when you need owned storage.
    fn text(&self, node: &Self::Node) -> StrTendril;
}

/// Parse an HTML string into a queryable document.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Production [`NodeScope`] over a parsed `dom_query` document.
pub struct DomScope<'a> {
    doc: &'a Document,
}

impl<'a> DomScope<'a> {
    /// Wrap a parsed document.
    #[must_use]
    pub fn new(doc: &'a Document) -> Self {
        Self { doc }
    }
}

/// Tag name of a selection's first node, lowercase.
fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_lowercase())
}

impl<'a> NodeScope for DomScope<'a> {
    type Node = Selection<'a>;

    fn root(&self) -> Selection<'a> {
        self.doc.select("html")
    }

    fn find_all(&self, node: &Selection<'a>, selector: &str) -> Result<Vec<Selection<'a>>> {
        // try_select degrades an unparseable selector to "no match" rather
        // than panicking; the chain resolver then falls through to the next
        // entry.
        let Some(matched) = node.try_select(selector) else {
            return Ok(Vec::new());
        };
        Ok(matched
            .nodes()
            .iter()
            .map(|n| Selection::from(*n))
            .collect())
    }

    fn find_first(&self, node: &Selection<'a>, selector: &str) -> Result<Option<Selection<'a>>> {
        Ok(node
            .try_select(selector)
            .and_then(|matched| matched.nodes().first().map(|n| Selection::from(*n))))
    }

    fn closest(&self, node: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
        let mut current = node.clone();
        while current.exists() {
            if tag_name(&current).as_deref() == Some(tag) {
                return Some(current);
            }
            current = current.parent();
        }
        None
    }

    fn contains(&self, ancestor: &Selection<'a>, node: &Selection<'a>) -> bool {
        let Some(ancestor_node) = ancestor.nodes().first() else {
            return false;
        };
        let mut current = node.nodes().first().copied();
        while let Some(n) = current {
            if n.id == ancestor_node.id {
                return true;
            }
            current = n.parent();
        }
        false
    }

    fn attr(&self, node: &Selection<'a>, name: &str) -> Option<StrTendril> {
        node.attr(name)
    }

    fn text(&self, node: &Selection<'a>) -> StrTendril {
        node.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_all_is_scoped_and_ordered() {
        let doc = parse(
            r#"<div id="outer">
                 <p class="x">first</p>
                 <section><p class="x">second</p></section>
               </div>
               <p class="x">elsewhere</p>"#,
        );
        let scope = DomScope::new(&doc);
        let root = scope.root();
        let outer = match scope.find_first(&root, "#outer") {
            Ok(Some(node)) => node,
            other => panic!("expected outer div, got {other:?}"),
        };

        let matches = match scope.find_all(&outer, "p.x") {
            Ok(matches) => matches,
            Err(err) => panic!("find_all failed: {err}"),
        };
        assert_eq!(matches.len(), 2);
        assert_eq!(scope.text(&matches[0]), "first".into());
        assert_eq!(scope.text(&matches[1]), "second".into());
    }

    #[test]
    fn find_all_invalid_selector_is_empty_not_panic() {
        let doc = parse("<div><p>text</p></div>");
        let scope = DomScope::new(&doc);
        let root = scope.root();

        let matches = match scope.find_all(&root, ":::not-a-selector") {
            Ok(matches) => matches,
            Err(err) => panic!("invalid selector should degrade to miss: {err}"),
        };
        assert!(matches.is_empty());
    }

    #[test]
    fn closest_includes_self() {
        let doc = parse(r#"<div><a href="/x"><h3 id="t">Title</h3></a></div>"#);
        let scope = DomScope::new(&doc);
        let root = scope.root();

        let anchor = match scope.find_first(&root, "a") {
            Ok(Some(node)) => node,
            other => panic!("expected anchor, got {other:?}"),
        };
        let from_self = scope.closest(&anchor, "a");
        assert!(from_self.is_some());

        let title = match scope.find_first(&root, "#t") {
            Ok(Some(node)) => node,
            other => panic!("expected title, got {other:?}"),
        };
        let from_title = scope.closest(&title, "a");
        assert!(from_title.is_some_and(|a| scope.attr(&a, "href").as_deref() == Some("/x")));
    }

    #[test]
    fn contains_tracks_subtree_membership() {
        let doc = parse(
            r#"<div id="a"><p id="inner">in</p></div>
               <div id="b"><p id="outer">out</p></div>"#,
        );
        let scope = DomScope::new(&doc);
        let root = scope.root();

        let a = match scope.find_first(&root, "#a") {
            Ok(Some(node)) => node,
            other => panic!("expected #a, got {other:?}"),
        };
        let inner = match scope.find_first(&root, "#inner") {
            Ok(Some(node)) => node,
            other => panic!("expected #inner, got {other:?}"),
        };
        let outer = match scope.find_first(&root, "#outer") {
            Ok(Some(node)) => node,
            other => panic!("expected #outer, got {other:?}"),
        };

        assert!(scope.contains(&a, &inner));
        assert!(scope.contains(&a, &a));
        assert!(!scope.contains(&a, &outer));
    }
}
