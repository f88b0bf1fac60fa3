//! Token categories
//!
//! Every token the tokenizer produces belongs to exactly one [`TokenType`].
//! Each category carries fixed metadata that the expression parser reads
//! instead of re-inspecting the token text: binary precedence, prefix and
//! postfix unary roles, and whether the token is an assignment operator.

use serde::{Serialize, Serializer};
use std::fmt;

/// The closed set of token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Value-bearing tokens
    Num,
    Name,
    Eof,

    // Punctuation
    BracketL,
    BracketR,
    BraceL,
    BraceR,
    ParenL,
    ParenR,
    Comma,
    Semi,
    Colon,
    DoubleColon,
    Dot,
    Question,
    Arrow,
    Ellipsis,
    BackQuote,
    At,

    // Operators
    Eq,
    Assign,
    IncDec,
    Prefix,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    BitShift,
    PlusMin,
    Modulo,
    Star,
    Slash,
    Exponent,

    // Keywords
    In,
    Yield,
    Delete,
    Typeof,
    Void,
}

impl TokenType {
    /// Display name used in diagnostics and token dumps.
    pub fn label(self) -> &'static str {
        match self {
            TokenType::Num => "num",
            TokenType::Name => "name",
            TokenType::Eof => "eof",
            TokenType::BracketL => "[",
            TokenType::BracketR => "]",
            TokenType::BraceL => "{",
            TokenType::BraceR => "}",
            TokenType::ParenL => "(",
            TokenType::ParenR => ")",
            TokenType::Comma => ",",
            TokenType::Semi => ";",
            TokenType::Colon => ":",
            TokenType::DoubleColon => "::",
            TokenType::Dot => ".",
            TokenType::Question => "?",
            TokenType::Arrow => "=>",
            TokenType::Ellipsis => "...",
            TokenType::BackQuote => "`",
            TokenType::At => "@",
            TokenType::Eq => "=",
            TokenType::Assign => "_=",
            TokenType::IncDec => "++/--",
            TokenType::Prefix => "prefix",
            TokenType::LogicalOr => "||",
            TokenType::LogicalAnd => "&&",
            TokenType::BitwiseOr => "|",
            TokenType::BitwiseXor => "^",
            TokenType::BitwiseAnd => "&",
            TokenType::Equality => "==/!=",
            TokenType::Relational => "</>",
            TokenType::BitShift => "<</>>",
            TokenType::PlusMin => "+/-",
            TokenType::Modulo => "%",
            TokenType::Star => "*",
            TokenType::Slash => "/",
            TokenType::Exponent => "**",
            TokenType::In => "in",
            TokenType::Yield => "yield",
            TokenType::Delete => "delete",
            TokenType::Typeof => "typeof",
            TokenType::Void => "void",
        }
    }

    /// Binary precedence, higher binds tighter. `None` for anything that
    /// is not a binary operator.
    pub fn binop(self) -> Option<u8> {
        match self {
            TokenType::LogicalOr => Some(1),
            TokenType::LogicalAnd => Some(2),
            TokenType::BitwiseOr => Some(3),
            TokenType::BitwiseXor => Some(4),
            TokenType::BitwiseAnd => Some(5),
            TokenType::Equality => Some(6),
            TokenType::Relational | TokenType::In => Some(7),
            TokenType::BitShift => Some(8),
            TokenType::PlusMin => Some(9),
            // `**` sits on the multiplicative level; only its associativity differs.
            TokenType::Modulo | TokenType::Star | TokenType::Slash | TokenType::Exponent => {
                Some(10)
            }
            _ => None,
        }
    }

    pub fn is_prefix(self) -> bool {
        matches!(
            self,
            TokenType::IncDec
                | TokenType::Prefix
                | TokenType::PlusMin
                | TokenType::Delete
                | TokenType::Typeof
                | TokenType::Void
        )
    }

    pub fn is_postfix(self) -> bool {
        matches!(self, TokenType::IncDec)
    }

    /// `=` and every compound assignment (`+=`, `<<=`, ...).
    pub fn is_assign(self) -> bool {
        matches!(self, TokenType::Eq | TokenType::Assign)
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, TokenType::Exponent)
    }

    /// Resolve a scanned word to its keyword category.
    pub fn keyword(word: &str) -> Option<TokenType> {
        match word {
            "in" => Some(TokenType::In),
            "yield" => Some(TokenType::Yield),
            "delete" => Some(TokenType::Delete),
            "typeof" => Some(TokenType::Typeof),
            "void" => Some(TokenType::Void),
            _ => None,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
