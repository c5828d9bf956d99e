//! Document processing: external tree production plus annotation.
//!
//! The base Markdown grammar lives behind [`TreeProducer`]; this crate
//! never builds structural nodes from raw text itself. [`Processor`] wires
//! a producer to the [annotation pass](crate::annotate) so a caller can go
//! from raw input to an annotated tree in one call.

use crate::annotate::{annotate, ParserOptions};
use crate::ast::Node;
use std::fmt;

/// Builds the base document tree from raw input.
pub trait TreeProducer {
    fn produce(&self, source: &str) -> Result<Node, ProduceError>;
}

/// Failure to obtain a valid base tree from the producer's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProduceError {
    InvalidTree(String),
}

impl fmt::Display for ProduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProduceError::InvalidTree(detail) => write!(f, "invalid document tree: {detail}"),
        }
    }
}

impl std::error::Error for ProduceError {}

/// Producer for mdast-shaped JSON, the wire format remark-style parsers
/// emit.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeProducer;

impl TreeProducer for JsonTreeProducer {
    fn produce(&self, source: &str) -> Result<Node, ProduceError> {
        Node::from_json(source).map_err(|err| ProduceError::InvalidTree(err.to_string()))
    }
}

/// Runs a producer and the annotation pass over one document.
#[derive(Debug, Clone, Default)]
pub struct Processor<P> {
    producer: P,
}

impl<P: TreeProducer> Processor<P> {
    pub fn new(producer: P) -> Self {
        Processor { producer }
    }

    /// Produces the base tree and annotates it in place.
    pub fn process(&self, source: &str, options: &ParserOptions) -> Result<Node, ProduceError> {
        let mut tree = self.producer.produce(source)?;
        annotate(&mut tree, options);
        Ok(tree)
    }
}
