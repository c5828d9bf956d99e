//! Annotation pass: social-text recognition over an already-parsed tree.
//!
//! The pass runs in a fixed order per child list:
//!
//! 1. [mailto-merge repair](mailto) — reattaches a dangling `@` text sibling
//!    to the email autolink the base parser produced, recovering a
//!    `@user@origin` mention candidate.
//! 2. The hashtag, mention, and emoji [rules](rules), each one re-splicing
//!    its matches before the next runs. Sequential refinement is part of
//!    the contract: hashtag spans are finalized first and the mention/email
//!    disambiguation only sees the text spans that remain.
//!
//! Splicing rebuilds a fresh child list and assigns it back once per rule,
//! so the original list is never mutated while it is being read. After each
//! splice, adjacent plain-text siblings are coalesced back into one node.

mod mailto;
mod rules;

use crate::ast::Node;
use serde::{Deserialize, Serialize};

pub(crate) const MAILTO_SCHEME: &str = "mailto:";

/// Options recognized by the annotation pass.
///
/// All fields are optional in serialized form; absence means annotation is
/// enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParserOptions {
    /// Disables the whole pass: no mailto-merge, no mention/hashtag/emoji
    /// recognition. `@`-led text stays plain text followed by an untouched
    /// mailto link.
    pub skip_mention_and_hashtag_annotation: bool,
}

/// Annotates the tree in place.
///
/// Total over valid trees: the pass re-partitions text values and never
/// fails. Inconsistent span output from a rule is an implementation bug and
/// is caught by a debug assertion, not reported as a runtime error.
pub fn annotate(tree: &mut Node, options: &ParserOptions) {
    if options.skip_mention_and_hashtag_annotation {
        return;
    }
    annotate_node(tree);
}

fn annotate_node(node: &mut Node) {
    // Text directly inside a mailto link was already recognized as an email
    // autolink by the base parser; running the rules there would annotate
    // it twice.
    let suppress_rules =
        matches!(node, Node::Link { url, .. } if url.starts_with(MAILTO_SCHEME));

    if let Some(children) = node.children_mut() {
        mailto::merge_mailto_links(children);
        if !suppress_rules {
            apply_rule(children, rules::hashtag_spans);
            apply_rule(children, rules::mention_spans);
            apply_rule(children, rules::emoji_spans);
        }
        for child in children.iter_mut() {
            annotate_node(child);
        }
    }
}

/// Replaces every text child the rule matches with the rule's spans.
///
/// Text nodes the rule does not match keep their value and position
/// untouched; spliced spans carry no position.
fn apply_rule(children: &mut Vec<Node>, rule: fn(&str) -> Option<Vec<rules::Span>>) {
    let mut rebuilt = Vec::with_capacity(children.len());
    for child in children.drain(..) {
        match child {
            Node::Text { value, position } => match rule(&value) {
                Some(spans) => {
                    debug_assert_eq!(
                        spans.iter().map(|s| s.raw()).collect::<String>(),
                        value,
                        "rule spans must tile the input text"
                    );
                    rebuilt.extend(spans.into_iter().map(rules::Span::into_node));
                }
                None => rebuilt.push(Node::Text { value, position }),
            },
            other => rebuilt.push(other),
        }
    }
    coalesce_text(&mut rebuilt);
    *children = rebuilt;
}

/// Merges runs of adjacent text siblings into the earliest node.
///
/// Values are concatenated and, when both sides carry positions, the
/// earlier span's end is extended to the later span's end.
pub(crate) fn coalesce_text(children: &mut Vec<Node>) {
    let mut rebuilt: Vec<Node> = Vec::with_capacity(children.len());
    for child in children.drain(..) {
        match (rebuilt.last_mut(), child) {
            (
                Some(Node::Text {
                    value: prev_value,
                    position: prev_position,
                }),
                Node::Text { value, position },
            ) => {
                prev_value.push_str(&value);
                if let (Some(prev), Some(next)) = (prev_position.as_mut(), position.as_ref()) {
                    prev.extend_to(next);
                }
            }
            (_, child) => rebuilt.push(child),
        }
    }
    *children = rebuilt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Point, Position};

    #[test]
    fn coalesce_merges_runs_and_positions() {
        let first = Position::new(Point::new(1, 1, 0), Point::new(1, 2, 1));
        let second = Position::new(Point::new(1, 2, 1), Point::new(1, 13, 12));
        let mut children = vec![
            Node::text_at("@", first),
            Node::text_at("123@abc.com", second),
            Node::mention("@end"),
        ];
        coalesce_text(&mut children);
        assert_eq!(children.len(), 2);
        assert_eq!(
            children[0],
            Node::text_at(
                "@123@abc.com",
                Position::new(Point::new(1, 1, 0), Point::new(1, 13, 12))
            )
        );
    }

    #[test]
    fn coalesce_keeps_non_text_separators() {
        let mut children = vec![Node::text("a"), Node::Break, Node::text("b")];
        coalesce_text(&mut children);
        assert_eq!(children.len(), 3);
    }

    #[test]
    fn options_deserialize_with_kebab_case_names() {
        let options: ParserOptions =
            serde_json::from_str(r#"{"skip-mention-and-hashtag-annotation": true}"#).unwrap();
        assert!(options.skip_mention_and_hashtag_annotation);

        let defaults: ParserOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, ParserOptions::default());
    }
}
