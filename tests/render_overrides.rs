//! Three-tier override resolution.

use mdsocial::testing::{TestContent, TestFactory, TestView};
use mdsocial::{Node, NodeKind, RenderOptions, Renderer};

fn marker(tag: &str) -> TestView {
    TestView {
        target: tag.to_string(),
        attrs: vec![],
        content: TestContent::Empty,
    }
}

#[test]
fn custom_renderer_return_value_is_used_verbatim() {
    let tree = Node::root(vec![Node::paragraph(vec![Node::hashtag("#rust")])]);
    let options = RenderOptions::new()
        .with_renderer(NodeKind::Hashtag, |node: &Node| {
            vec![marker(&format!("hashtag:{}", node.value().unwrap()))]
        });
    let views = Renderer::new(TestFactory).render(&tree, &options);

    // The override fires even though the node is reached from the default
    // path of its parents.
    let paragraph = &views[0].children()[0];
    assert_eq!(paragraph.children()[0], marker("hashtag:#rust"));
}

#[test]
fn custom_renderer_suppresses_automatic_child_rendering() {
    let tree = Node::root(vec![Node::paragraph(vec![Node::text("invisible")])]);
    let options =
        RenderOptions::new().with_renderer(NodeKind::Paragraph, |_: &Node| vec![marker("stub")]);
    let views = Renderer::new(TestFactory).render(&tree, &options);

    assert_eq!(views[0].children(), &[marker("stub")][..]);
}

#[test]
fn custom_renderer_output_is_spliced_flat_into_the_parent() {
    let tree = Node::root(vec![Node::paragraph(vec![
        Node::text("a"),
        Node::Break,
        Node::text("b"),
    ])]);
    let options = RenderOptions::new()
        .with_renderer(NodeKind::Break, |_: &Node| vec![marker("x"), marker("y")]);
    let views = Renderer::new(TestFactory).render(&tree, &options);

    let paragraph = &views[0].children()[0];
    assert_eq!(paragraph.children().len(), 4);
    assert_eq!(paragraph.children()[1], marker("x"));
    assert_eq!(paragraph.children()[2], marker("y"));
}

#[test]
fn custom_component_keeps_the_default_attribute_pair() {
    let tree = Node::root(vec![Node::paragraph(vec![Node::mention("@user")])]);
    let options =
        RenderOptions::new().with_component(NodeKind::Mention, "MentionChip".to_string());
    let views = Renderer::new(TestFactory).render(&tree, &options);

    let mention = &views[0].children()[0].children()[0];
    assert_eq!(mention.target, "MentionChip");
    assert_eq!(mention.attr("data-node-type"), Some("mention"));
    assert_eq!(mention.attr("data-node-style"), Some("default"));
    // Value leaves pass the raw value through as the component content.
    assert_eq!(mention.text(), Some("@user"));
}

#[test]
fn custom_component_renders_children_as_content() {
    let tree = Node::root(vec![Node::paragraph(vec![Node::text("inside")])]);
    let options =
        RenderOptions::new().with_component(NodeKind::Paragraph, "Prose".to_string());
    let views = Renderer::new(TestFactory).render(&tree, &options);

    let paragraph = &views[0].children()[0];
    assert_eq!(paragraph.target, "Prose");
    assert_eq!(paragraph.children()[0].text(), Some("inside"));
}

#[test]
fn renderer_takes_precedence_over_component() {
    let tree = Node::root(vec![Node::hashtag("#both")]);
    let options = RenderOptions::new()
        .with_renderer(NodeKind::Hashtag, |_: &Node| vec![marker("renderer")])
        .with_component(NodeKind::Hashtag, "Component".to_string());
    let views = Renderer::new(TestFactory).render(&tree, &options);

    assert_eq!(views[0].children(), &[marker("renderer")][..]);
}

#[test]
fn overrides_for_the_root_replace_the_whole_output() {
    let tree = Node::root(vec![Node::paragraph(vec![])]);
    let options = RenderOptions::new()
        .with_renderer(NodeKind::Root, |_: &Node| vec![marker("a"), marker("b")]);
    let views = Renderer::new(TestFactory).render(&tree, &options);

    assert_eq!(views, vec![marker("a"), marker("b")]);
}
