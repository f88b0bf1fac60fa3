//! Lexical analysis for shell arithmetic expressions.
//!
//! This module turns source text into a lazy stream of position-annotated
//! tokens. Scanning is context sensitive (HTML-style comments depend on the
//! previous token, `::` depends on the enabled plugins), so the tokenizer is
//! hand written rather than generated.

pub mod chars;
mod number;
mod operator;
pub mod token;
pub mod token_type;
pub mod tokenizer;
mod word;

pub use token::{Number, Position, Token, TokenValue};
pub use token_type::TokenType;
pub use tokenizer::{Tokenizer, TokenizerState};

use crate::error::LexerError;

pub type LexResult<T> = Result<T, LexerError>;
