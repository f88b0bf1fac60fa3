//! Shell Arithmetic Parser Library
//!
//! This library tokenizes shell-style arithmetic expressions and parses them
//! into a precedence-correct expression tree.

pub mod ast;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;

// Re-export commonly used types
pub use ast::Expression;
pub use driver::{parse_expression, tokenize, Session};
pub use error::{ArithError, ArithResult, LexerError, ParserError};
pub use lexer::{Token, TokenType, Tokenizer};
pub use options::{Options, ParserContext, Plugin};
pub use parser::{ParseResult, Parser};
