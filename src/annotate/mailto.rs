//! Mailto-merge repair.
//!
//! The base parser autolinks `user@domain.tld`, so a `@user@domain.tld`
//! mention arrives as a text sibling ending in `@` followed by a
//! `mailto:` link. The repair hoists the link's inner text back into
//! the parent's child list and coalesces the pieces, leaving a single
//! `@user@domain.tld` text node for the mention rule to classify. A bare
//! `test@example.com` has no trailing-`@` text sibling and its link is
//! left untouched.

use super::{coalesce_text, MAILTO_SCHEME};
use crate::ast::Node;

/// Replaces every qualifying mailto link in `children` with the link's own
/// first child, then coalesces adjacent text siblings.
pub(crate) fn merge_mailto_links(children: &mut Vec<Node>) {
    let mut rebuilt: Vec<Node> = Vec::with_capacity(children.len());
    for child in children.drain(..) {
        match child {
            Node::Link {
                url,
                children: mut inner,
                ..
            } if url.starts_with(MAILTO_SCHEME)
                && !inner.is_empty()
                && matches!(
                    rebuilt.last(),
                    Some(Node::Text { value, .. }) if value.ends_with('@')
                ) =>
            {
                rebuilt.push(inner.remove(0));
            }
            other => rebuilt.push(other),
        }
    }
    coalesce_text(&mut rebuilt);
    *children = rebuilt;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailto_link(address: &str) -> Node {
        Node::link(format!("mailto:{address}"), vec![Node::text(address)])
    }

    #[test]
    fn merges_a_dangling_at_into_the_link_text() {
        let mut children = vec![Node::text("@"), mailto_link("123@abc.com")];
        merge_mailto_links(&mut children);
        assert_eq!(children, vec![Node::text("@123@abc.com")]);
    }

    #[test]
    fn leaves_links_without_a_dangling_at_alone() {
        let mut children = vec![Node::text("Contact me at "), mailto_link("test@example.com")];
        merge_mailto_links(&mut children);
        assert_eq!(
            children,
            vec![
                Node::text("Contact me at "),
                mailto_link("test@example.com"),
            ]
        );
    }

    #[test]
    fn leaves_a_leading_mailto_link_alone() {
        let mut children = vec![mailto_link("test@example.com"), Node::text(" first")];
        merge_mailto_links(&mut children);
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], Node::Link { .. }));
    }

    #[test]
    fn ignores_non_mailto_links() {
        let mut children = vec![
            Node::text("x@"),
            Node::link("https://example.com", vec![Node::text("site")]),
        ];
        merge_mailto_links(&mut children);
        assert_eq!(children.len(), 2);
        assert!(matches!(children[1], Node::Link { .. }));
    }

    #[test]
    fn coalesces_surrounding_text_after_the_hoist() {
        let mut children = vec![
            Node::text("ping @"),
            mailto_link("user@dom.tld"),
            Node::text(" soon"),
        ];
        merge_mailto_links(&mut children);
        assert_eq!(children, vec![Node::text("ping @user@dom.tld soon")]);
    }
}
