//! Tree node variants and the parallel kind enumeration.

use crate::ast::Position;
use serde::{Deserialize, Serialize};

/// Column alignment metadata attached to tables.
///
/// The default rendering ignores it; it is carried so custom renderers can
/// honor it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignKind {
    Left,
    Right,
    Center,
}

/// A node of the document tree.
///
/// Parents exclusively own their children and sibling order is document
/// order. The annotation pass only ever re-partitions text values into
/// `Text` / `Mention` / `Hashtag` / `Emoji` siblings; it never invents a
/// representation outside this enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Root {
        #[serde(default)]
        children: Vec<Node>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Heading {
        depth: u8,
        #[serde(default)]
        children: Vec<Node>,
    },
    Text {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    Emphasis {
        #[serde(default)]
        children: Vec<Node>,
    },
    Strong {
        #[serde(default)]
        children: Vec<Node>,
    },
    Delete {
        #[serde(default)]
        children: Vec<Node>,
    },
    InlineCode {
        value: String,
    },
    Code {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
    Blockquote {
        #[serde(default)]
        children: Vec<Node>,
    },
    List {
        #[serde(default)]
        ordered: bool,
        #[serde(default)]
        children: Vec<Node>,
    },
    ListItem {
        /// `Some` only for GFM task-list items.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        checked: Option<bool>,
        #[serde(default)]
        children: Vec<Node>,
    },
    ThematicBreak,
    Break,
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Table {
        #[serde(default)]
        align: Vec<Option<AlignKind>>,
        #[serde(default)]
        children: Vec<Node>,
    },
    TableRow {
        #[serde(default)]
        children: Vec<Node>,
    },
    TableCell {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Raw markup passed through verbatim. The caller trusts the source.
    Html {
        value: String,
    },
    /// `@user` or `@user@origin`, including the leading `@`.
    Mention {
        value: String,
    },
    /// `#tag`, including the leading `#`.
    Hashtag {
        value: String,
    },
    /// `:name:` shortcode; the value is the bare name without colons.
    Emoji {
        value: String,
    },
    InlineMath {
        value: String,
    },
    Math {
        value: String,
    },
}

/// Field-less counterpart of [`Node`], used to key override maps and the
/// `data-node-type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading,
    Text,
    Emphasis,
    Strong,
    Delete,
    InlineCode,
    Code,
    Blockquote,
    List,
    ListItem,
    ThematicBreak,
    Break,
    Link,
    Image,
    Table,
    TableRow,
    TableCell,
    Html,
    Mention,
    Hashtag,
    Emoji,
    InlineMath,
    Math,
}

impl NodeKind {
    /// The camelCase kind string, identical to the serde `type` tag.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::Text => "text",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Strong => "strong",
            NodeKind::Delete => "delete",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::Code => "code",
            NodeKind::Blockquote => "blockquote",
            NodeKind::List => "list",
            NodeKind::ListItem => "listItem",
            NodeKind::ThematicBreak => "thematicBreak",
            NodeKind::Break => "break",
            NodeKind::Link => "link",
            NodeKind::Image => "image",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableCell => "tableCell",
            NodeKind::Html => "html",
            NodeKind::Mention => "mention",
            NodeKind::Hashtag => "hashtag",
            NodeKind::Emoji => "emoji",
            NodeKind::InlineMath => "inlineMath",
            NodeKind::Math => "math",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root { .. } => NodeKind::Root,
            Node::Paragraph { .. } => NodeKind::Paragraph,
            Node::Heading { .. } => NodeKind::Heading,
            Node::Text { .. } => NodeKind::Text,
            Node::Emphasis { .. } => NodeKind::Emphasis,
            Node::Strong { .. } => NodeKind::Strong,
            Node::Delete { .. } => NodeKind::Delete,
            Node::InlineCode { .. } => NodeKind::InlineCode,
            Node::Code { .. } => NodeKind::Code,
            Node::Blockquote { .. } => NodeKind::Blockquote,
            Node::List { .. } => NodeKind::List,
            Node::ListItem { .. } => NodeKind::ListItem,
            Node::ThematicBreak => NodeKind::ThematicBreak,
            Node::Break => NodeKind::Break,
            Node::Link { .. } => NodeKind::Link,
            Node::Image { .. } => NodeKind::Image,
            Node::Table { .. } => NodeKind::Table,
            Node::TableRow { .. } => NodeKind::TableRow,
            Node::TableCell { .. } => NodeKind::TableCell,
            Node::Html { .. } => NodeKind::Html,
            Node::Mention { .. } => NodeKind::Mention,
            Node::Hashtag { .. } => NodeKind::Hashtag,
            Node::Emoji { .. } => NodeKind::Emoji,
            Node::InlineMath { .. } => NodeKind::InlineMath,
            Node::Math { .. } => NodeKind::Math,
        }
    }

    /// Ordered child list, when this kind has one.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::Blockquote { children }
            | Node::List { children, .. }
            | Node::ListItem { children, .. }
            | Node::Link { children, .. }
            | Node::Table { children, .. }
            | Node::TableRow { children }
            | Node::TableCell { children } => Some(children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::Blockquote { children }
            | Node::List { children, .. }
            | Node::ListItem { children, .. }
            | Node::Link { children, .. }
            | Node::Table { children, .. }
            | Node::TableRow { children }
            | Node::TableCell { children } => Some(children),
            _ => None,
        }
    }

    /// Text payload, when this kind is a value leaf.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text { value, .. }
            | Node::InlineCode { value }
            | Node::Code { value, .. }
            | Node::Html { value }
            | Node::Mention { value }
            | Node::Hashtag { value }
            | Node::Emoji { value }
            | Node::InlineMath { value }
            | Node::Math { value } => Some(value),
            _ => None,
        }
    }

    /// Concatenation of every value leaf in document order.
    ///
    /// This is the quantity the annotation pass preserves (minus the `@`
    /// consumed by a mailto-merge and the colons consumed by emoji
    /// recognition).
    pub fn collect_text(&self) -> String {
        fn walk(node: &Node, out: &mut String) {
            if let Some(value) = node.value() {
                out.push_str(value);
            }
            if let Some(children) = node.children() {
                for child in children {
                    walk(child, out);
                }
            }
        }
        let mut out = String::new();
        walk(self, &mut out);
        out
    }

    /// Serializes the tree to mdast-shaped JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a tree from mdast-shaped JSON.
    pub fn from_json(source: &str) -> Result<Node, serde_json::Error> {
        serde_json::from_str(source)
    }
}

// Constructors for the nodes tests and the annotation pass build most often.
impl Node {
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading { depth, children }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
            position: None,
        }
    }

    pub fn text_at(value: impl Into<String>, position: Position) -> Self {
        Node::Text {
            value: value.into(),
            position: Some(position),
        }
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link {
            url: url.into(),
            title: None,
            children,
        }
    }

    pub fn mention(value: impl Into<String>) -> Self {
        Node::Mention {
            value: value.into(),
        }
    }

    pub fn hashtag(value: impl Into<String>) -> Self {
        Node::Hashtag {
            value: value.into(),
        }
    }

    pub fn emoji(value: impl Into<String>) -> Self {
        Node::Emoji {
            value: value.into(),
        }
    }

    pub fn inline_code(value: impl Into<String>) -> Self {
        Node::InlineCode {
            value: value.into(),
        }
    }

    pub fn inline_math(value: impl Into<String>) -> Self {
        Node::InlineMath {
            value: value.into(),
        }
    }

    pub fn math(value: impl Into<String>) -> Self {
        Node::Math {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_strings_match_the_serde_tag() {
        let node = Node::inline_math("E=mc^2");
        let json = node.to_json().unwrap();
        assert!(json.contains(r#""type":"inlineMath""#));
        assert_eq!(node.kind().as_str(), "inlineMath");
    }

    #[test]
    fn mdast_json_round_trips() {
        let tree = Node::root(vec![Node::paragraph(vec![
            Node::text("see "),
            Node::link("https://example.com", vec![Node::text("this")]),
        ])]);
        let json = tree.to_json().unwrap();
        assert_eq!(Node::from_json(&json).unwrap(), tree);
    }

    #[test]
    fn deserializes_remark_shaped_input() {
        let json = r#"{
            "type": "root",
            "children": [{
                "type": "heading",
                "depth": 2,
                "children": [{
                    "type": "text",
                    "value": "Hello Markdown",
                    "position": {
                        "start": {"line": 1, "column": 4, "offset": 3},
                        "end": {"line": 1, "column": 18, "offset": 17}
                    }
                }]
            }]
        }"#;
        let tree = Node::from_json(json).unwrap();
        assert_eq!(tree.kind(), NodeKind::Root);
        let heading = &tree.children().unwrap()[0];
        assert_eq!(heading.kind(), NodeKind::Heading);
        assert!(matches!(heading, Node::Heading { depth: 2, .. }));
    }

    #[test]
    fn task_list_checked_state_survives_deserialization() {
        let json = r#"{
            "type": "list",
            "ordered": false,
            "children": [
                {"type": "listItem", "checked": true, "children": []},
                {"type": "listItem", "checked": false, "children": []},
                {"type": "listItem", "children": []}
            ]
        }"#;
        let list = Node::from_json(json).unwrap();
        let items = list.children().unwrap();
        assert!(matches!(items[0], Node::ListItem { checked: Some(true), .. }));
        assert!(matches!(items[1], Node::ListItem { checked: Some(false), .. }));
        assert!(matches!(items[2], Node::ListItem { checked: None, .. }));
    }

    #[test]
    fn collect_text_walks_value_leaves_in_document_order() {
        let tree = Node::root(vec![Node::paragraph(vec![
            Node::text("a "),
            Node::Strong {
                children: vec![Node::text("b")],
            },
            Node::inline_code("c"),
        ])]);
        assert_eq!(tree.collect_text(), "a bc");
    }
}
