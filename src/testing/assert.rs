//! Fluent deep-structure assertions over document trees.

use crate::ast::{Node, NodeKind};

/// Entry point: asserts on `node` and, through [`TreeAssert::child`], on
/// any descendant.
pub fn assert_tree(node: &Node) -> TreeAssert<'_> {
    TreeAssert {
        node,
        path: "root".to_string(),
    }
}

/// Assertion cursor over one node. Every method panics with the node's
/// path on mismatch and returns `self` for chaining.
pub struct TreeAssert<'a> {
    node: &'a Node,
    path: String,
}

impl<'a> TreeAssert<'a> {
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(
            self.node.kind(),
            expected,
            "kind mismatch at {}",
            self.path
        );
        self
    }

    pub fn value(self, expected: &str) -> Self {
        match self.node.value() {
            Some(value) => assert_eq!(value, expected, "value mismatch at {}", self.path),
            None => panic!("{} ({}) has no value", self.path, self.node.kind()),
        }
        self
    }

    /// Shorthand for `.kind(NodeKind::Text).value(expected)`.
    pub fn text(self, expected: &str) -> Self {
        self.kind(NodeKind::Text).value(expected)
    }

    pub fn link_url(self, expected: &str) -> Self {
        match self.node {
            Node::Link { url, .. } => {
                assert_eq!(url, expected, "link url mismatch at {}", self.path)
            }
            _ => panic!("{} ({}) is not a link", self.path, self.node.kind()),
        }
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let count = self.node.children().map_or(0, <[Node]>::len);
        assert_eq!(count, expected, "child count mismatch at {}", self.path);
        self
    }

    pub fn child(self, index: usize, verify: impl FnOnce(TreeAssert<'_>)) -> Self {
        let children = self
            .node
            .children()
            .unwrap_or_else(|| panic!("{} ({}) has no children", self.path, self.node.kind()));
        let child = children.get(index).unwrap_or_else(|| {
            panic!(
                "{} has {} children, no index {}",
                self.path,
                children.len(),
                index
            )
        });
        verify(TreeAssert {
            node: child,
            path: format!("{}.{}[{}]", self.path, child.kind(), index),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_a_small_hierarchy() {
        let tree = Node::root(vec![Node::paragraph(vec![
            Node::text("hi "),
            Node::hashtag("#rust"),
        ])]);
        assert_tree(&tree)
            .kind(NodeKind::Root)
            .child_count(1)
            .child(0, |p| {
                p.kind(NodeKind::Paragraph)
                    .child_count(2)
                    .child(0, |t| {
                        t.text("hi ");
                    })
                    .child(1, |h| {
                        h.kind(NodeKind::Hashtag).value("#rust");
                    });
            });
    }

    #[test]
    #[should_panic(expected = "kind mismatch")]
    fn reports_kind_mismatches() {
        assert_tree(&Node::text("x")).kind(NodeKind::Mention);
    }

    #[test]
    #[should_panic(expected = "has no children")]
    fn reports_missing_children() {
        assert_tree(&Node::text("x")).child(0, |_| {});
    }
}
