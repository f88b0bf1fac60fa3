//! 三項演算子の解析

use crate::ast::*;
use crate::lexer::{Position, TokenType};
use crate::parser::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};

impl<C: TokenCursor> Parser<C> {
    pub(in crate::parser) fn parse_maybe_conditional(&mut self) -> ParseResult<Expression> {
        let start = self.start_pos();
        let expr = self.parse_expr_ops()?;
        self.parse_conditional(expr, start)
    }

    /// `test ? consequent : alternate`。`?` が無ければ `expr` をそのまま返す
    fn parse_conditional(&mut self, expr: Expression, start: Position) -> ParseResult<Expression> {
        if !self.eat(TokenType::Question)? {
            return Ok(expr);
        }

        let consequent = self.parse_maybe_assign()?;
        self.expect(TokenType::Colon)?;
        let alternate = self.parse_maybe_assign()?;

        Ok(Expression::Conditional(ConditionalExpression {
            test: Box::new(expr),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            span: self.finish_span(start),
            extra: Extra::default(),
        }))
    }
}
