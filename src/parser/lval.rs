//! 代入先の検証
//!
//! 代入の左辺と `++`/`--` の対象になれるのは識別子と添字アクセスだけ。

use crate::ast::Expression;
use crate::error::ParserError;

use super::ParseResult;

/// 式が代入先として有効かを検証
pub(super) fn check_lval(expr: &Expression, context: &str) -> ParseResult<()> {
    match expr {
        Expression::Identifier(_) | Expression::Member(_) => Ok(()),
        _ => Err(ParserError::InvalidAssignmentTarget {
            context: context.to_string(),
            pos: expr.span().start,
        }),
    }
}

/// `=` の左辺を代入先の形に変換
///
/// 式の文法には分割代入のパターンが無いため、検証のみで式はそのまま返す。
pub(super) fn to_assignable(expr: Expression) -> ParseResult<Expression> {
    check_lval(&expr, "assignment expression")?;
    Ok(expr)
}
