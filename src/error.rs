//! Error types for the tokenizer, the parser and the driver.
//!
//! Every error is fatal for the current tokenize/parse call and carries the
//! byte offset that triggered it, which the driver turns into a
//! codespan-reporting diagnostic.

use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithError {
    /// Tokenizer error
    #[error("lexical error: {0}")]
    Lexer(#[from] LexerError),

    /// Parser error
    #[error("syntax error: {0}")]
    Parser(#[from] ParserError),

    /// File I/O error
    #[error("file error: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

impl ArithError {
    /// Byte offset of the failure, if the error is tied to the source.
    pub fn pos(&self) -> Option<usize> {
        match self {
            ArithError::Lexer(e) => Some(e.pos()),
            ArithError::Parser(e) => Some(e.pos()),
            ArithError::Io(_) | ArithError::Other(_) => None,
        }
    }
}

/// Lexical errors raised by the tokenizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerError {
    #[error("unexpected character '{ch}' at offset {pos}")]
    UnexpectedCharacter { ch: char, pos: usize },

    #[error("invalid number at offset {pos}")]
    InvalidNumber { pos: usize },

    #[error("expected number in radix {radix} at offset {pos}")]
    ExpectedRadixDigits { radix: u32, pos: usize },

    #[error("identifier directly after number at offset {pos}")]
    IdentifierAfterNumber { pos: usize },

    #[error("number literal out of range at offset {pos}")]
    NumberOutOfRange { pos: usize },

    #[error("bad character escape sequence at offset {pos}")]
    BadEscape { pos: usize },

    #[error("expecting Unicode escape sequence \\uXXXX at offset {pos}")]
    ExpectedUnicodeEscape { pos: usize },

    #[error("invalid Unicode escape at offset {pos}")]
    InvalidUnicodeEscape { pos: usize },

    #[error("code point out of bounds at offset {pos}")]
    CodePointOutOfBounds { pos: usize },

    #[error("HTML-style comment is not allowed in module code (offset {pos})")]
    HtmlCommentInModule { pos: usize },
}

impl LexerError {
    pub fn pos(&self) -> usize {
        match self {
            LexerError::UnexpectedCharacter { pos, .. }
            | LexerError::InvalidNumber { pos }
            | LexerError::ExpectedRadixDigits { pos, .. }
            | LexerError::IdentifierAfterNumber { pos }
            | LexerError::NumberOutOfRange { pos }
            | LexerError::BadEscape { pos }
            | LexerError::ExpectedUnicodeEscape { pos }
            | LexerError::InvalidUnicodeEscape { pos }
            | LexerError::CodePointOutOfBounds { pos }
            | LexerError::HtmlCommentInModule { pos } => *pos,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LexerError::UnexpectedCharacter { .. } => "this character cannot start a token",
            LexerError::IdentifierAfterNumber { .. } => "separate the number from this name",
            LexerError::HtmlCommentInModule { .. } => "comment starts here",
            _ => "malformed literal",
        }
    }
}

/// Syntax errors raised by the expression parser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    /// The token cursor failed while advancing.
    #[error(transparent)]
    Lexical(#[from] LexerError),

    #[error("unexpected token {found} at offset {pos}, expected {expected}")]
    UnexpectedToken {
        expected: String,
        found: String,
        pos: usize,
    },

    #[error("invalid left-hand side in {context} at offset {pos}")]
    InvalidAssignmentTarget { context: String, pos: usize },

    #[error("deleting local variable in strict mode at offset {pos}")]
    DeleteLocalInStrict { pos: usize },

    #[error("illegal expression at offset {pos}: wrap left hand side or entire exponentiation in parentheses")]
    AmbiguousExponentiation { pos: usize },

    #[error("{feature} is not supported (offset {pos})")]
    Unsupported { feature: String, pos: usize },

    #[error("expression nested too deeply at offset {pos}")]
    NestingTooDeep { pos: usize },
}

impl ParserError {
    pub fn pos(&self) -> usize {
        match self {
            ParserError::Lexical(e) => e.pos(),
            ParserError::UnexpectedToken { pos, .. }
            | ParserError::InvalidAssignmentTarget { pos, .. }
            | ParserError::DeleteLocalInStrict { pos }
            | ParserError::AmbiguousExponentiation { pos }
            | ParserError::Unsupported { pos, .. }
            | ParserError::NestingTooDeep { pos } => *pos,
        }
    }
}

/// An error bound to the file it was raised in.
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: ArithError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: ArithError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// Convert into a codespan-reporting diagnostic. The label covers the
    /// character at the failing offset, or nothing at end of input.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic<usize> {
        let range = |pos: usize| {
            let start = pos.min(source.len());
            let width = source
                .get(start..)
                .and_then(|rest| rest.chars().next())
                .map_or(0, char::len_utf8);
            start..start + width
        };

        match &self.error {
            ArithError::Lexer(e) | ArithError::Parser(ParserError::Lexical(e)) => {
                Diagnostic::error()
                    .with_message(format!("lexical error: {}", e))
                    .with_labels(vec![
                        Label::primary(self.file_id, range(e.pos())).with_message(e.label())
                    ])
            }
            ArithError::Parser(e) => {
                let label = Label::primary(self.file_id, range(e.pos()));
                let diagnostic =
                    Diagnostic::error().with_message(format!("syntax error: {}", e));
                match e {
                    ParserError::AmbiguousExponentiation { .. } => diagnostic
                        .with_labels(vec![label.with_message("operand of a unary operator")])
                        .with_notes(vec![
                            "write `(-x) ** y` or `-(x ** y)` to make the intent explicit"
                                .to_string(),
                        ]),
                    ParserError::InvalidAssignmentTarget { .. } => diagnostic.with_labels(vec![
                        label.with_message("only names and subscripts can be assigned")
                    ]),
                    _ => diagnostic.with_labels(vec![label]),
                }
            }
            ArithError::Io(message) => {
                Diagnostic::error().with_message(format!("file error: {}", message))
            }
            ArithError::Other(message) => Diagnostic::error().with_message(message.clone()),
        }
    }
}

/// Result alias for driver-level operations.
pub type ArithResult<T> = Result<T, ArithError>;

impl From<std::io::Error> for ArithError {
    fn from(e: std::io::Error) -> Self {
        ArithError::Io(e.to_string())
    }
}
