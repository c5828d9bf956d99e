//! Built-in structural defaults, one mapping per node kind.

use super::{Attr, MathConverter, Renderer, RenderOptions, ViewContent, ViewFactory, ViewTarget};
use crate::ast::{Node, NodeKind};

const DATA_NODE_TYPE: &str = "data-node-type";
const DATA_NODE_STYLE: &str = "data-node-style";
const DEFAULT_STYLE: &str = "default";

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// The identification pair attached to every default and component
/// mapping, letting callers target elements by semantic kind regardless of
/// the concrete tag.
pub(super) fn standard_attrs(kind: NodeKind) -> [Attr; 2] {
    [
        Attr::new(DATA_NODE_TYPE, kind.as_str()),
        Attr::new(DATA_NODE_STYLE, DEFAULT_STYLE),
    ]
}

impl<F: ViewFactory, M: MathConverter> Renderer<F, M> {
    pub(super) fn render_default(
        &self,
        node: &Node,
        options: &RenderOptions<F::Component, F::View>,
    ) -> Vec<F::View> {
        let view = match node {
            Node::Root { children } => self.container("div", NodeKind::Root, children, options),
            Node::Paragraph { children } => {
                self.container("p", NodeKind::Paragraph, children, options)
            }
            Node::Heading { depth, children } => {
                let tag = HEADING_TAGS[((*depth).clamp(1, 6) - 1) as usize];
                self.container(tag, NodeKind::Heading, children, options)
            }
            Node::Text { value, .. } => self.value_leaf("span", NodeKind::Text, value),
            Node::Emphasis { children } => {
                self.container("em", NodeKind::Emphasis, children, options)
            }
            Node::Strong { children } => {
                self.container("strong", NodeKind::Strong, children, options)
            }
            Node::Delete { children } => self.container("del", NodeKind::Delete, children, options),
            Node::InlineCode { value } => self.value_leaf("code", NodeKind::InlineCode, value),
            Node::Code { value, .. } => {
                // The block nests a code element carrying the raw value
                // inside the pre wrapper.
                let inner = self.factory.produce(
                    ViewTarget::Element("code"),
                    &[Attr::new(DATA_NODE_STYLE, DEFAULT_STYLE)],
                    ViewContent::Text(value),
                );
                self.factory.produce(
                    ViewTarget::Element("pre"),
                    &standard_attrs(NodeKind::Code),
                    ViewContent::Children(vec![inner]),
                )
            }
            Node::Blockquote { children } => {
                self.container("blockquote", NodeKind::Blockquote, children, options)
            }
            Node::List { ordered, children } => {
                let tag = if *ordered { "ol" } else { "ul" };
                self.container(tag, NodeKind::List, children, options)
            }
            Node::ListItem { children, .. } => {
                self.container("li", NodeKind::ListItem, children, options)
            }
            Node::ThematicBreak => self.void("hr", NodeKind::ThematicBreak),
            Node::Break => self.void("br", NodeKind::Break),
            Node::Link {
                url,
                title,
                children,
            } => {
                let mut attrs = vec![Attr::new("href", url.clone())];
                if let Some(title) = title {
                    attrs.push(Attr::new("title", title.clone()));
                }
                attrs.extend(standard_attrs(NodeKind::Link));
                self.factory.produce(
                    ViewTarget::Element("a"),
                    &attrs,
                    ViewContent::Children(self.render_children(children, options)),
                )
            }
            Node::Image { url, alt, title } => {
                let mut attrs = vec![Attr::new("src", url.clone())];
                if let Some(alt) = alt {
                    attrs.push(Attr::new("alt", alt.clone()));
                }
                if let Some(title) = title {
                    attrs.push(Attr::new("title", title.clone()));
                }
                attrs.extend(standard_attrs(NodeKind::Image));
                self.factory
                    .produce(ViewTarget::Element("img"), &attrs, ViewContent::Empty)
            }
            Node::Table { children, .. } => {
                self.container("table", NodeKind::Table, children, options)
            }
            Node::TableRow { children } => {
                self.container("tr", NodeKind::TableRow, children, options)
            }
            Node::TableCell { children } => {
                self.container("td", NodeKind::TableCell, children, options)
            }
            Node::Html { value } => self.factory.produce(
                ViewTarget::Element("div"),
                &standard_attrs(NodeKind::Html),
                ViewContent::Markup(value),
            ),
            Node::Mention { value } => self.value_leaf("span", NodeKind::Mention, value),
            Node::Hashtag { value } => self.value_leaf("span", NodeKind::Hashtag, value),
            Node::Emoji { value } => self.value_leaf("span", NodeKind::Emoji, value),
            Node::InlineMath { value } => self.math_leaf("span", NodeKind::InlineMath, value, false),
            Node::Math { value } => self.math_leaf("div", NodeKind::Math, value, true),
        };
        vec![view]
    }

    fn container(
        &self,
        tag: &str,
        kind: NodeKind,
        children: &[Node],
        options: &RenderOptions<F::Component, F::View>,
    ) -> F::View {
        self.factory.produce(
            ViewTarget::Element(tag),
            &standard_attrs(kind),
            ViewContent::Children(self.render_children(children, options)),
        )
    }

    fn value_leaf(&self, tag: &str, kind: NodeKind, value: &str) -> F::View {
        self.factory.produce(
            ViewTarget::Element(tag),
            &standard_attrs(kind),
            ViewContent::Text(value),
        )
    }

    fn void(&self, tag: &str, kind: NodeKind) -> F::View {
        self.factory.produce(
            ViewTarget::Element(tag),
            &standard_attrs(kind),
            ViewContent::Empty,
        )
    }

    /// Attempts external markup conversion; a failure falls back to a plain
    /// wrapper holding the raw value. Math nodes carry the kind attribute
    /// only.
    fn math_leaf(&self, tag: &str, kind: NodeKind, value: &str, display: bool) -> F::View {
        let attrs = [Attr::new(DATA_NODE_TYPE, kind.as_str())];
        match self.math.convert(value, display) {
            Ok(markup) => self.factory.produce(
                ViewTarget::Element(tag),
                &attrs,
                ViewContent::Markup(&markup),
            ),
            Err(_) => {
                self.factory
                    .produce(ViewTarget::Element(tag), &attrs, ViewContent::Text(value))
            }
        }
    }
}
