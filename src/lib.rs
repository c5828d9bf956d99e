//! # mdsocial
//!
//! Social-text semantics for Markdown document trees.
//!
//! The crate owns two tree transforms over an mdast-style AST:
//!
//! 1. The [annotation pass](annotate) rewrites text/link siblings into a
//!    richer node set: `@user` / `@user@origin` mentions, `#tag` hashtags,
//!    `:name:` emoji shortcodes, and a mailto-merge repair that recovers
//!    mentions the base parser split into a dangling `@` plus an email
//!    autolink.
//! 2. The [rendering dispatch](render) maps the annotated tree to a tree of
//!    opaque view nodes through an injected [`ViewFactory`], consulting
//!    per-kind overrides (custom renderer, then custom component) before
//!    falling back to built-in structural defaults.
//!
//! The base Markdown grammar is an external collaborator: a
//! [`TreeProducer`](processor::TreeProducer) supplies the parsed tree and
//! this crate never constructs structural nodes itself. The provided
//! [`JsonTreeProducer`](processor::JsonTreeProducer) accepts the
//! mdast-shaped JSON that remark-style parsers emit.
//!
//! ## Testing
//!
//! The [`testing`] module provides sample base trees, a fluent AST
//! assertion helper, and a [`TestFactory`](testing::TestFactory) view
//! factory that records produced nodes for inspection.

pub mod annotate;
pub mod ast;
pub mod processor;
pub mod render;
pub mod testing;

pub use annotate::{annotate, ParserOptions};
pub use ast::{AlignKind, Node, NodeKind, Point, Position};
pub use processor::{JsonTreeProducer, ProduceError, Processor, TreeProducer};
pub use render::{
    Attr, MathConverter, MathError, NoMathSupport, RenderOptions, Renderer, ViewContent,
    ViewFactory, ViewTarget,
};
