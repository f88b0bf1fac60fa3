//! パーサーモジュール
//!
//! このモジュールはトークン列を式の構文木に解析する責任を持ちます。
//! 二項演算子は優先順位上昇法（precedence climbing）で解析し、
//! 代入・三項演算子・単項演算子・カンマ式はそれぞれ専用の規則で扱います。
//!
//! ## 結合の強さ（弱い順）
//!
//! ```text
//! a, b          カンマ式
//! a = b         代入（右結合）
//! a ? b : c     三項演算子
//! a || b ...    二項演算子（優先順位 1〜10）
//! -a, ++a, a++  単項演算子
//! a[i], (a)     添字アクセス・括弧・リテラル
//! ```
//!
//! パーサーは生のテキストに触れず、[`TokenCursor`] を通してトークンを読みます。

mod cursor;
mod expr;
mod lval;
mod parser_impl;

// 公開API
pub use cursor::{TokenCursor, TokenStream};
pub use parser_impl::{Parser, MAX_NESTING_DEPTH};

use crate::error::ParserError;
pub type ParseResult<T> = Result<T, ParserError>;
