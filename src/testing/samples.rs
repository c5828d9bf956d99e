//! Canned base trees, shaped the way a remark-style parser emits them.
//!
//! These are the inputs the annotation pass sees in practice: emails are
//! already autolinked into `mailto:` links, and a `@user@origin` mention
//! arrives split into a dangling `@` text node plus such a link.

use crate::ast::Node;

fn mailto_link(address: &str) -> Node {
    Node::link(format!("mailto:{address}"), vec![Node::text(address)])
}

/// `root > paragraph > text(value)`.
pub fn paragraph_text(value: &str) -> Node {
    Node::root(vec![Node::paragraph(vec![Node::text(value)])])
}

/// `@123@abc.com` as parsed: dangling `@` plus an email autolink.
pub fn mention_with_origin() -> Node {
    Node::root(vec![Node::paragraph(vec![
        Node::text("@"),
        mailto_link("123@abc.com"),
    ])])
}

/// `Contact me at test@example.com` as parsed: the email is an autolink
/// with no dangling `@` in front.
pub fn plain_email() -> Node {
    Node::root(vec![Node::paragraph(vec![
        Node::text("Contact me at "),
        mailto_link("test@example.com"),
    ])])
}

/// `Emails: @test1@example.com, test2@example.com` as parsed: one mention
/// candidate and one bare email, both autolinked.
pub fn emails_and_mention() -> Node {
    Node::root(vec![Node::paragraph(vec![
        Node::text("Emails: @"),
        mailto_link("test1@example.com"),
        Node::text(", "),
        mailto_link("test2@example.com"),
    ])])
}

/// `# Header1`.
pub fn heading_document() -> Node {
    Node::root(vec![Node::heading(1, vec![Node::text("Header1")])])
}

/// A two-item GFM task list.
pub fn task_list() -> Node {
    Node::root(vec![Node::List {
        ordered: false,
        children: vec![
            Node::ListItem {
                checked: Some(true),
                children: vec![Node::paragraph(vec![Node::text("Task 1")])],
            },
            Node::ListItem {
                checked: Some(false),
                children: vec![Node::paragraph(vec![Node::text("Task 2")])],
            },
        ],
    }])
}
