//! 添字アクセスと原子式の解析
//!
//! 原子式は数値リテラル、識別子、括弧で囲まれた式のいずれか。
//! その後に `[式]` による添字アクセスが任意個続く。

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::{Position, TokenType};
use crate::parser::cursor::TokenCursor;
use crate::parser::{ParseResult, Parser};

impl<C: TokenCursor> Parser<C> {
    /// 原子式と、それに続く添字アクセスを解析
    pub(in crate::parser) fn parse_expr_subscripts(&mut self) -> ParseResult<Expression> {
        let start = self.start_pos();
        let potential_arrow = self.potential_arrow_at == Some(start.offset);
        let base = self.parse_expr_atom()?;

        if potential_arrow && self.is(TokenType::Arrow) {
            return Err(ParserError::Unsupported {
                feature: "arrow function".to_string(),
                pos: self.current().start,
            });
        }

        self.parse_subscripts(base, start)
    }

    fn parse_subscripts(&mut self, mut base: Expression, start: Position) -> ParseResult<Expression> {
        while self.eat(TokenType::BracketL)? {
            let property = self.parse_expression_internal()?;
            self.expect(TokenType::BracketR)?;
            base = Expression::Member(MemberExpression {
                object: Box::new(base),
                property: Box::new(property),
                computed: true,
                span: self.finish_span(start),
                extra: Extra::default(),
            });
        }
        Ok(base)
    }

    fn parse_expr_atom(&mut self) -> ParseResult<Expression> {
        match self.ty() {
            TokenType::Num => self.parse_numeric_literal(),
            TokenType::Name => {
                let start = self.start_pos();
                let name = self
                    .current()
                    .value
                    .as_str()
                    .unwrap_or_default()
                    .to_string();
                self.next()?;
                Ok(Expression::Identifier(Identifier {
                    name,
                    span: self.finish_span(start),
                    extra: Extra::default(),
                }))
            }
            TokenType::ParenL => self.parse_paren_expression(),
            _ => Err(self.unexpected("expression")),
        }
    }

    fn parse_numeric_literal(&mut self) -> ParseResult<Expression> {
        let token = self.current();
        let value = token
            .value
            .as_number()
            .ok_or_else(|| self.unexpected("number"))?;
        let raw = self
            .cursor
            .input()
            .get(token.start..token.end)
            .unwrap_or_default()
            .to_string();

        let start = self.start_pos();
        self.next()?;
        Ok(Expression::NumericLiteral(NumericLiteral {
            value,
            span: self.finish_span(start),
            extra: Extra::literal(&raw, value),
        }))
    }

    /// `( 式 )`。括弧自体はノードにならず、中の式に印を付ける
    fn parse_paren_expression(&mut self) -> ParseResult<Expression> {
        let start = self.start_pos();
        self.next()?;
        let mut expr = self.parse_expression_internal()?;
        self.expect(TokenType::ParenR)?;

        let extra = expr.extra_mut();
        extra.parenthesized = true;
        extra.paren_start = Some(start.offset);
        Ok(expr)
    }
}
