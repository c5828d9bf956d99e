//! Testing utilities shared by unit and integration tests.
//!
//! Three tools live here and are meant to be used together:
//!
//! 1. [`samples`] — canned base trees shaped exactly the way a remark-style
//!    parser emits them. Tests should take base trees from here instead of
//!    hand-writing the same fixtures in every file, so a change to the
//!    assumed parser output is made in one place.
//! 2. [`assert_tree`] — fluent deep-structure verification. Asserting node
//!    counts alone is not informative; this helper checks kinds, values,
//!    and hierarchy with a failure message that names the path to the
//!    offending node.
//! 3. [`TestFactory`] — a [`ViewFactory`](crate::render::ViewFactory) that
//!    records targets, attributes, and content as plain data for
//!    inspection, plus stub math converters for both outcomes.

mod assert;
mod harness;
pub mod samples;

pub use assert::{assert_tree, TreeAssert};
pub use harness::{EchoMath, FailingMath, TestContent, TestFactory, TestView};
