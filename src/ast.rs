//! mdast-style document tree shared by the annotation pass and the
//! rendering dispatch.
//!
//! The node set is closed: everything the external parser can supply and
//! everything the annotation pass can introduce is a variant of [`Node`].
//! The serde representation is internally tagged with `type` in camelCase,
//! so serialized trees are interchangeable with the JSON that remark-style
//! parsers emit.

mod node;
mod position;

pub use node::{AlignKind, Node, NodeKind};
pub use position::{Point, Position};
