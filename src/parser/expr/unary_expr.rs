//! 単項演算式の解析
//!
//! 前置演算子（`-` `+` `!` `~` `typeof` `void` `delete` `++` `--`）と
//! 後置の `++`/`--` を扱う。

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::TokenType;
use crate::parser::cursor::TokenCursor;
use crate::parser::lval::check_lval;
use crate::parser::{ParseResult, Parser};

impl<C: TokenCursor> Parser<C> {
    /// 前置・後置の単項演算を解析
    pub(in crate::parser) fn parse_maybe_unary(&mut self) -> ParseResult<Expression> {
        if self.ty().is_prefix() {
            return self.nested(Self::parse_prefix_unary);
        }

        let start = self.start_pos();
        let mut expr = self.parse_expr_subscripts()?;

        while self.ty().is_postfix() && !self.can_insert_semicolon() {
            check_lval(&expr, "postfix operation")?;
            let operator = self.operator(UpdateOperator::from_text)?;
            self.next()?;

            expr = Expression::Update(UpdateExpression {
                operator,
                prefix: false,
                argument: Box::new(expr),
                span: self.finish_span(start),
                extra: Extra::default(),
            });
        }
        Ok(expr)
    }

    fn parse_prefix_unary(&mut self) -> ParseResult<Expression> {
        let start = self.start_pos();
        let prefix = if self.is(TokenType::IncDec) {
            Prefix::Update(self.operator(UpdateOperator::from_text)?)
        } else {
            Prefix::Unary(self.operator(UnaryOperator::from_text)?)
        };
        self.next()?;

        let arg_type = self.ty();
        let argument = self.parse_maybe_unary()?;
        let extra = Extra::with_parenthesized_argument(
            arg_type == TokenType::ParenL && !argument.is_parenthesized(),
        );

        match prefix {
            Prefix::Update(operator) => {
                check_lval(&argument, "prefix operation")?;
                Ok(Expression::Update(UpdateExpression {
                    operator,
                    prefix: true,
                    argument: Box::new(argument),
                    span: self.finish_span(start),
                    extra,
                }))
            }
            Prefix::Unary(operator) => {
                if self.context.strict
                    && operator == UnaryOperator::Delete
                    && matches!(argument, Expression::Identifier(_))
                {
                    return Err(ParserError::DeleteLocalInStrict { pos: start.offset });
                }
                Ok(Expression::Unary(UnaryExpression {
                    operator,
                    prefix: true,
                    argument: Box::new(argument),
                    span: self.finish_span(start),
                    extra,
                }))
            }
        }
    }
}

enum Prefix {
    Update(UpdateOperator),
    Unary(UnaryOperator),
}
