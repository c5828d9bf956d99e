//! Per-kind override maps consulted by the dispatch.

use crate::ast::{Node, NodeKind};
use std::collections::HashMap;

/// A caller-supplied replacement for one kind's entire mapping. Its return
/// value is used verbatim; the dispatch renders nothing for the node, not
/// even its children.
pub type CustomRenderer<V> = Box<dyn Fn(&Node) -> Vec<V>>;

/// Rendering configuration: two independent partial mappings from node
/// kind to override, both consulted per node in renderer-then-component
/// order before the built-in default applies.
///
/// `C` is the view framework's component handle type and `V` its node
/// type.
pub struct RenderOptions<C, V> {
    pub custom_renderers: HashMap<NodeKind, CustomRenderer<V>>,
    pub custom_components: HashMap<NodeKind, C>,
}

impl<C, V> Default for RenderOptions<C, V> {
    fn default() -> Self {
        RenderOptions {
            custom_renderers: HashMap::new(),
            custom_components: HashMap::new(),
        }
    }
}

impl<C, V> RenderOptions<C, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a full custom renderer for `kind`.
    pub fn with_renderer(
        mut self,
        kind: NodeKind,
        renderer: impl Fn(&Node) -> Vec<V> + 'static,
    ) -> Self {
        self.custom_renderers.insert(kind, Box::new(renderer));
        self
    }

    /// Registers a custom component handle for `kind`.
    pub fn with_component(mut self, kind: NodeKind, component: C) -> Self {
        self.custom_components.insert(kind, component);
        self
    }
}
