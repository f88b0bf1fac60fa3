//! Token value objects handed from the tokenizer to its consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::token_type::TokenType;
use super::tokenizer::TokenizerState;

/// Value of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

/// Payload attached to a token.
///
/// Operators carry their source text, identifiers and keywords their
/// decoded word, numbers their parsed value. Punctuation and eof carry
/// nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    #[default]
    None,
    Number(Number),
    Str(String),
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// A byte offset together with its line (1-based) and column (0-based,
/// counted in Unicode scalar values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Immutable snapshot of one tokenizer step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(rename = "type")]
    pub ty: TokenType,
    pub value: TokenValue,
    pub start: usize,
    pub end: usize,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Token {
    pub fn start_position(&self) -> Position {
        Position {
            offset: self.start,
            line: self.start_line,
            column: self.start_column,
        }
    }
}

impl From<&TokenizerState> for Token {
    fn from(state: &TokenizerState) -> Self {
        Self {
            ty: state.ty,
            value: state.value.clone(),
            start: state.start,
            end: state.end,
            start_line: state.start_line,
            start_column: state.start_column,
            end_line: state.end_line,
            end_column: state.end_column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "{}", self.ty),
            value => write!(f, "{}({})", self.ty, value),
        }
    }
}
