//! カンマ式の解析

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};

impl<C: TokenCursor> Parser<C> {
    /// `a, b, c` を解析。カンマが無ければ代入式をそのまま返す
    pub(in crate::parser) fn parse_expression_internal(&mut self) -> ParseResult<Expression> {
        let start = self.start_pos();
        let expr = self.parse_maybe_assign()?;
        if !self.is(TokenType::Comma) {
            return Ok(expr);
        }

        let mut expressions = vec![expr];
        while self.eat(TokenType::Comma)? {
            expressions.push(self.parse_maybe_assign()?);
        }

        Ok(Expression::Sequence(SequenceExpression {
            expressions,
            span: self.finish_span(start),
            extra: Extra::default(),
        }))
    }
}
