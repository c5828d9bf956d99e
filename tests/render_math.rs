//! Math conversion and its raw-value fallback.

use mdsocial::testing::{EchoMath, FailingMath, TestFactory};
use mdsocial::{Node, RenderOptions, Renderer};

#[test]
fn converted_inline_math_injects_markup() {
    let tree = Node::inline_math("E=mc^2");
    let views = Renderer::with_math(TestFactory, EchoMath).render(&tree, &RenderOptions::new());

    let math = &views[0];
    assert_eq!(math.target, "span");
    assert_eq!(math.attr("data-node-type"), Some("inlineMath"));
    // Math nodes carry the kind attribute only.
    assert_eq!(math.attr("data-node-style"), None);
    assert_eq!(math.markup(), Some("<math mode=\"inline\">E=mc^2</math>"));
}

#[test]
fn block_math_converts_in_display_mode() {
    let tree = Node::math("E=mc^2");
    let views = Renderer::with_math(TestFactory, EchoMath).render(&tree, &RenderOptions::new());

    assert_eq!(views[0].target, "div");
    assert_eq!(views[0].markup(), Some("<math mode=\"display\">E=mc^2</math>"));
}

#[test]
fn conversion_failure_falls_back_to_the_raw_value() {
    let tree = Node::math("\\undefined{macro}");
    let views = Renderer::with_math(TestFactory, FailingMath).render(&tree, &RenderOptions::new());

    let math = &views[0];
    assert_eq!(math.target, "div");
    assert_eq!(math.attr("data-node-type"), Some("math"));
    assert_eq!(math.text(), Some("\\undefined{macro}"));
}

#[test]
fn renderer_without_math_support_always_falls_back() {
    let tree = Node::root(vec![Node::paragraph(vec![
        Node::text("mass-energy: "),
        Node::inline_math("E=mc^2"),
    ])]);
    let views = Renderer::new(TestFactory).render(&tree, &RenderOptions::new());

    let math = &views[0].children()[0].children()[1];
    assert_eq!(math.target, "span");
    assert_eq!(math.text(), Some("E=mc^2"));
}
