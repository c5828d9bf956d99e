//! Injected collaborators of the rendering dispatch.
//!
//! The view framework behind the produced nodes is opaque: the dispatch
//! hands a [`ViewFactory`] a target, an attribute list, and content, and
//! never inspects what comes back. Math conversion is a second injected
//! capability whose failure is consumed locally by the dispatch.

use std::fmt;

/// One attribute on a produced view node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: &'static str,
    pub value: String,
}

impl Attr {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Attr {
            name,
            value: value.into(),
        }
    }
}

/// What a view node is produced from: a structural element tag or a
/// caller-supplied component handle.
#[derive(Debug)]
pub enum ViewTarget<'a, C> {
    Element(&'a str),
    Component(&'a C),
}

/// Content of a produced view node.
#[derive(Debug)]
pub enum ViewContent<'a, V> {
    /// Already-rendered child views, in document order.
    Children(Vec<V>),
    /// Raw text content.
    Text(&'a str),
    /// Verbatim markup injected without escaping. The caller trusts the
    /// source (html passthrough, converted math).
    Markup(&'a str),
    /// Self-closing node.
    Empty,
}

/// Produces opaque view nodes.
///
/// `View` is the framework's node type and `Component` its component
/// handle type; both are black boxes to the dispatch.
pub trait ViewFactory {
    type View;
    type Component;

    fn produce(
        &self,
        target: ViewTarget<'_, Self::Component>,
        attrs: &[Attr],
        content: ViewContent<'_, Self::View>,
    ) -> Self::View;
}

/// Converts math source to markup. Synchronous and fallible; the dispatch
/// downgrades failure to a plain fallback node.
pub trait MathConverter {
    fn convert(&self, source: &str, display: bool) -> Result<String, MathError>;
}

/// Failure payload of a [`MathConverter`]. Never escapes the dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathError {
    message: String,
}

impl MathError {
    pub fn new(message: impl Into<String>) -> Self {
        MathError {
            message: message.into(),
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "math conversion failed: {}", self.message)
    }
}

impl std::error::Error for MathError {}

/// Converter used when no math support is configured; every conversion
/// fails, so math nodes always take the raw-value fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMathSupport;

impl MathConverter for NoMathSupport {
    fn convert(&self, _source: &str, _display: bool) -> Result<String, MathError> {
        Err(MathError::new("no math converter configured"))
    }
}
