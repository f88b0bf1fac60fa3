//! Abstract Syntax Tree (AST) definitions for shell arithmetic expressions.
//!
//! Nodes serialize to the familiar ESTree-like JSON shape: a `type` tag,
//! `start`/`end` byte offsets and a `loc` with line/column pairs.

use serde::{Deserialize, Serialize};

use crate::lexer::{Number, Position};

mod expressions;
mod operators;

pub use expressions::*;
pub use operators::*;

/// Line (1-based) and column (0-based) of a source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl From<Position> for LineColumn {
    fn from(position: Position) -> Self {
        Self {
            line: position.line,
            column: position.column,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: LineColumn,
    pub end: LineColumn,
}

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub loc: SourceLocation,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start: start.offset,
            end: end.offset,
            loc: SourceLocation {
                start: start.into(),
                end: end.into(),
            },
        }
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Parser annotations that are not part of a node's grammar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Extra {
    /// The node was written inside parentheses.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub parenthesized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paren_start: Option<usize>,
    /// Set on prefix unary nodes: the operand began with `(` without being a
    /// parenthesized expression itself, as in `-(a)[0]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parenthesized_argument: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<Number>,
}

impl Extra {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn literal(raw: &str, value: Number) -> Self {
        Self {
            raw: Some(raw.to_string()),
            raw_value: Some(value),
            ..Self::default()
        }
    }

    pub fn with_parenthesized_argument(parenthesized_argument: bool) -> Self {
        Self {
            parenthesized_argument: Some(parenthesized_argument),
            ..Self::default()
        }
    }
}
