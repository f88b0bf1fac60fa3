//! 代入式の解析
//!
//! `=` や `+=` は右結合で、`a = b = c` は `a = (b = c)` になる。

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::TokenType;
use crate::parser::cursor::TokenCursor;
use crate::parser::lval::{check_lval, to_assignable};
use crate::parser::{ParseResult, Parser};

impl<C: TokenCursor> Parser<C> {
    /// 代入式を解析。括弧や添字の中身もここから入るため、入れ子の深さを数える
    pub(in crate::parser) fn parse_maybe_assign(&mut self) -> ParseResult<Expression> {
        self.nested(Self::parse_assign)
    }

    fn parse_assign(&mut self) -> ParseResult<Expression> {
        if self.is(TokenType::Yield) && self.context.in_generator {
            return Err(ParserError::Unsupported {
                feature: "yield expression".to_string(),
                pos: self.current().start,
            });
        }

        let start = self.start_pos();
        if self.is(TokenType::ParenL) || self.is(TokenType::Name) {
            self.potential_arrow_at = Some(start.offset);
        }

        let left = self.parse_maybe_conditional()?;
        if !self.ty().is_assign() {
            return Ok(left);
        }

        let operator = self.operator(AssignmentOperator::from_text)?;
        let left = if self.is(TokenType::Eq) {
            to_assignable(left)?
        } else {
            check_lval(&left, "assignment expression")?;
            left
        };
        self.next()?;

        let right = self.parse_maybe_assign()?;
        Ok(Expression::Assignment(AssignmentExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span: self.finish_span(start),
            extra: Extra::default(),
        }))
    }
}
