//! 二項演算式の解析
//!
//! 優先順位上昇法で解析する。演算子の優先順位と結合性は
//! [`TokenType::binop`] と [`TokenType::is_right_associative`] から読む。

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::{Position, TokenType};
use crate::parser::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};

impl<C: TokenCursor> Parser<C> {
    /// 二項演算の連なりを解析
    pub(in crate::parser) fn parse_expr_ops(&mut self) -> ParseResult<Expression> {
        let start = self.start_pos();
        let expr = self.parse_maybe_unary()?;
        self.parse_expr_op(expr, start, 0)
    }

    /// `left` に続く、優先順位が `min_prec` より高い演算子をすべて畳み込む
    fn parse_expr_op(
        &mut self,
        mut left: Expression,
        left_start: Position,
        min_prec: u8,
    ) -> ParseResult<Expression> {
        loop {
            let op = self.ty();
            let Some(prec) = op.binop() else {
                return Ok(left);
            };
            // `in` は二項演算子として扱わない
            if op == TokenType::In || prec <= min_prec {
                return Ok(left);
            }

            if op == TokenType::Exponent {
                check_exponent_operand(&left)?;
            }

            let operator = match op {
                TokenType::LogicalOr | TokenType::LogicalAnd => {
                    Operator::Logical(self.operator(LogicalOperator::from_text)?)
                }
                _ => Operator::Binary(self.operator(BinaryOperator::from_text)?),
            };
            self.next()?;

            let right_start = self.start_pos();
            let operand = self.parse_maybe_unary()?;
            // 右結合の連鎖は深さに上限が無いので入れ子として数える
            let right = if op.is_right_associative() {
                self.nested(|p| p.parse_expr_op(operand, right_start, prec - 1))?
            } else {
                self.parse_expr_op(operand, right_start, prec)?
            };
            let right = Box::new(right);

            let span = self.finish_span(left_start);
            let left_box = Box::new(left);
            left = match operator {
                Operator::Logical(operator) => Expression::Logical(LogicalExpression {
                    left: left_box,
                    operator,
                    right,
                    span,
                    extra: Extra::default(),
                }),
                Operator::Binary(operator) => Expression::Binary(BinaryExpression {
                    left: left_box,
                    operator,
                    right,
                    span,
                    extra: Extra::default(),
                }),
            };
        }
    }
}

/// `||`/`&&` は論理式、それ以外は二項演算式になる
enum Operator {
    Logical(LogicalOperator),
    Binary(BinaryOperator),
}

/// `-x ** y` のように括弧の無い単項式を `**` の左辺にすることは禁止
fn check_exponent_operand(left: &Expression) -> ParseResult<()> {
    if let Expression::Unary(unary) = left {
        if unary.extra.parenthesized_argument != Some(true) && !unary.extra.parenthesized {
            return Err(ParserError::AmbiguousExponentiation {
                pos: unary.argument.span().start,
            });
        }
    }
    Ok(())
}
