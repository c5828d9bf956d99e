//! Rendering dispatch: annotated tree to opaque view tree.
//!
//! Resolution per visited node, in order:
//!
//! 1. a custom renderer registered for the node's kind — its return value
//!    is used verbatim and nothing else runs for that node;
//! 2. a custom component handle registered for the kind — wrapped with the
//!    standard attribute pair and given the recursively rendered children
//!    (or the raw value for value leaves) as content;
//! 3. the built-in structural default for the kind.
//!
//! Children are mapped depth-first in order and flattened: a child mapping
//! to several views is spliced into its parent's content, not nested. The
//! default path re-enters this resolution for every child, so overrides
//! apply at every depth. Dispatch is an exhaustive match over the closed
//! kind set; there is no unrecognized-kind path at runtime.

mod defaults;
mod factory;
mod options;

pub use factory::{Attr, MathConverter, MathError, NoMathSupport, ViewContent, ViewFactory, ViewTarget};
pub use options::{CustomRenderer, RenderOptions};

use crate::ast::Node;
use defaults::standard_attrs;

/// Maps annotated trees to view trees through an injected [`ViewFactory`]
/// and [`MathConverter`].
///
/// Rendering never fails: missing overrides fall through to defaults and a
/// math conversion failure is downgraded to a raw-value fallback node.
pub struct Renderer<F, M = NoMathSupport> {
    factory: F,
    math: M,
}

impl<F: ViewFactory> Renderer<F, NoMathSupport> {
    /// A renderer without math support; math nodes always fall back to
    /// their raw value.
    pub fn new(factory: F) -> Self {
        Renderer {
            factory,
            math: NoMathSupport,
        }
    }
}

impl<F: ViewFactory, M: MathConverter> Renderer<F, M> {
    pub fn with_math(factory: F, math: M) -> Self {
        Renderer { factory, math }
    }

    /// Renders the tree, returning one view per root mapping (exactly one
    /// for a single-root document unless an override returns more).
    pub fn render(
        &self,
        ast: &Node,
        options: &RenderOptions<F::Component, F::View>,
    ) -> Vec<F::View> {
        self.render_node(ast, options)
    }

    fn render_node(
        &self,
        node: &Node,
        options: &RenderOptions<F::Component, F::View>,
    ) -> Vec<F::View> {
        let kind = node.kind();
        if let Some(renderer) = options.custom_renderers.get(&kind) {
            return renderer(node);
        }
        if let Some(component) = options.custom_components.get(&kind) {
            let content = match (node.children(), node.value()) {
                (Some(children), _) => {
                    ViewContent::Children(self.render_children(children, options))
                }
                (None, Some(value)) => ViewContent::Text(value),
                (None, None) => ViewContent::Empty,
            };
            let view = self.factory.produce(
                ViewTarget::Component(component),
                &standard_attrs(kind),
                content,
            );
            return vec![view];
        }
        self.render_default(node, options)
    }

    fn render_children(
        &self,
        children: &[Node],
        options: &RenderOptions<F::Component, F::View>,
    ) -> Vec<F::View> {
        children
            .iter()
            .flat_map(|child| self.render_node(child, options))
            .collect()
    }
}
