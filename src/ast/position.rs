//! Source positions carried by text nodes.
//!
//! Only the fields the coalescing rules need are modeled: a span is a pair
//! of points, and merging two adjacent spans extends the earlier span's end.

use serde::{Deserialize, Serialize};

/// A single location in the source document (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Point {
            line,
            column,
            offset: Some(offset),
        }
    }
}

/// Half-open source span between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

impl Position {
    pub fn new(start: Point, end: Point) -> Self {
        Position { start, end }
    }

    /// Extends this span so it also covers `later`.
    ///
    /// Used when two adjacent text siblings are merged into one node.
    pub fn extend_to(&mut self, later: &Position) {
        self.end = later.end;
    }
}
