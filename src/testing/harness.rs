//! Recording view factory and stub math converters.

use crate::render::{Attr, MathConverter, MathError, ViewContent, ViewFactory, ViewTarget};

/// View node produced by [`TestFactory`]: everything the factory was
/// handed, captured as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestView {
    /// Element tag, or the component handle for component targets.
    pub target: String,
    pub attrs: Vec<(String, String)>,
    pub content: TestContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestContent {
    Children(Vec<TestView>),
    Text(String),
    Markup(String),
    Empty,
}

impl TestView {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child views, empty for non-children content.
    pub fn children(&self) -> &[TestView] {
        match &self.content {
            TestContent::Children(children) => children,
            _ => &[],
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            TestContent::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn markup(&self) -> Option<&str> {
        match &self.content {
            TestContent::Markup(markup) => Some(markup),
            _ => None,
        }
    }
}

/// Factory capturing every produced node for inspection. Component handles
/// are plain strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestFactory;

impl ViewFactory for TestFactory {
    type View = TestView;
    type Component = String;

    fn produce(
        &self,
        target: ViewTarget<'_, String>,
        attrs: &[Attr],
        content: ViewContent<'_, TestView>,
    ) -> TestView {
        TestView {
            target: match target {
                ViewTarget::Element(tag) => tag.to_string(),
                ViewTarget::Component(handle) => handle.clone(),
            },
            attrs: attrs
                .iter()
                .map(|attr| (attr.name.to_string(), attr.value.clone()))
                .collect(),
            content: match content {
                ViewContent::Children(children) => TestContent::Children(children),
                ViewContent::Text(text) => TestContent::Text(text.to_string()),
                ViewContent::Markup(markup) => TestContent::Markup(markup.to_string()),
                ViewContent::Empty => TestContent::Empty,
            },
        }
    }
}

/// Converter that always succeeds, wrapping the source so tests can see
/// both the input and the display mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoMath;

impl MathConverter for EchoMath {
    fn convert(&self, source: &str, display: bool) -> Result<String, MathError> {
        let mode = if display { "display" } else { "inline" };
        Ok(format!("<math mode=\"{mode}\">{source}</math>"))
    }
}

/// Converter that always fails, forcing the raw-value fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingMath;

impl MathConverter for FailingMath {
    fn convert(&self, source: &str, _display: bool) -> Result<String, MathError> {
        Err(MathError::new(format!("cannot convert {source:?}")))
    }
}
