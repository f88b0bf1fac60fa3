//! メインパーサー構造とユーティリティ

use log::debug;

use crate::ast::{Expression, Span};
use crate::error::ParserError;
use crate::lexer::{Position, Token, TokenType, TokenValue};
use crate::options::{Options, ParserContext};

use super::cursor::{TokenCursor, TokenStream};
use super::ParseResult;

/// 括弧・前置演算子・右結合の演算子による入れ子の上限
pub const MAX_NESTING_DEPTH: usize = 64;

/// 式パーサー
///
/// トークンは `C` が提供するカーソルから1つずつ読む。
pub struct Parser<C> {
    pub(super) cursor: C,
    pub(super) context: ParserContext,
    /// アロー関数が始まり得る位置（名前または `(` の開始位置）
    pub(super) potential_arrow_at: Option<usize>,
    /// 現在の入れ子の深さ
    depth: usize,
}

impl<'src> Parser<TokenStream<'src>> {
    /// ソース文字列から直接パーサーを作成
    pub fn from_source(input: &'src str, options: &Options) -> ParseResult<Self> {
        let cursor = TokenStream::new(input, options)?;
        Ok(Self::new(cursor, ParserContext::from(options)))
    }
}

impl<C: TokenCursor> Parser<C> {
    pub fn new(cursor: C, context: ParserContext) -> Self {
        Self {
            cursor,
            context,
            potential_arrow_at: None,
            depth: 0,
        }
    }

    pub fn context(&self) -> ParserContext {
        self.context
    }

    /// カンマ式を含む1つの式を解析
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        debug!("parsing expression at offset {}", self.current().start);
        let expr = self.parse_expression_internal()?;
        let span = expr.span();
        debug!("parsed {} at {}..{}", expr.kind(), span.start, span.end);
        Ok(expr)
    }

    /// 式を解析し、入力の終端まで消費したことを確認する
    pub fn parse_to_end(&mut self) -> ParseResult<Expression> {
        let expr = self.parse_expression()?;
        if !self.is(TokenType::Eof) {
            return Err(self.unexpected("end of input"));
        }
        Ok(expr)
    }

    // ==================== ユーティリティメソッド ====================

    /// 現在のトークンを取得
    pub(super) fn current(&self) -> &Token {
        self.cursor.current()
    }

    /// 現在のトークンの種類
    pub(super) fn ty(&self) -> TokenType {
        self.cursor.current().ty
    }

    pub(super) fn is(&self, ty: TokenType) -> bool {
        self.ty() == ty
    }

    /// 次のトークンに進む
    pub(super) fn next(&mut self) -> ParseResult<()> {
        self.cursor.advance()?;
        Ok(())
    }

    /// 特定のトークンにマッチしたら進む
    pub(super) fn eat(&mut self, ty: TokenType) -> ParseResult<bool> {
        if self.is(ty) {
            self.next()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 特定のトークンを期待
    pub(super) fn expect(&mut self, ty: TokenType) -> ParseResult<()> {
        if self.eat(ty)? {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", ty.label())))
        }
    }

    /// ノードの開始位置（現在のトークンの開始）
    pub(super) fn start_pos(&self) -> Position {
        self.current().start_position()
    }

    /// 開始位置から直前のトークンの終わりまでのスパンを作成
    pub(super) fn finish_span(&self, start: Position) -> Span {
        Span::new(start, self.cursor.last_token_end())
    }

    /// 現在の演算子トークンを対応する演算子へ変換
    pub(super) fn operator<T>(&self, from_text: fn(&str) -> Option<T>) -> ParseResult<T> {
        self.current()
            .value
            .as_str()
            .and_then(from_text)
            .ok_or_else(|| self.unexpected("operator"))
    }

    /// 入れ子を1段深くして `parse` を実行する
    ///
    /// 上限を超えると、現在のトークンの位置で `NestingTooDeep` を返す。
    pub(super) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParserError::NestingTooDeep {
                pos: self.current().start,
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// 文の区切りを補える位置か
    ///
    /// 文の終端を持たない純粋な式の文法では常に false。
    pub(super) fn can_insert_semicolon(&self) -> bool {
        self.context.statement_terminators
            && (self.is(TokenType::Eof)
                || self.is(TokenType::BraceR)
                || self.cursor.has_line_break_before())
    }

    /// 予期しないトークンエラーを作成
    pub(super) fn unexpected(&self, expected: &str) -> ParserError {
        let token = self.current();
        ParserError::UnexpectedToken {
            expected: expected.to_string(),
            found: describe(token),
            pos: token.start,
        }
    }
}

fn describe(token: &Token) -> String {
    match &token.value {
        TokenValue::Str(text) => format!("'{}'", text),
        TokenValue::Number(n) => n.to_string(),
        TokenValue::None if token.ty == TokenType::Eof => "end of input".to_string(),
        TokenValue::None => format!("'{}'", token.ty.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parser(input: &str) -> Parser<TokenStream<'_>> {
        Parser::from_source(input, &Options::default()).unwrap()
    }

    #[test]
    fn test_eat_and_expect() {
        let mut p = parser("( x");
        assert!(!p.eat(TokenType::ParenR).unwrap());
        assert!(p.eat(TokenType::ParenL).unwrap());

        let err = p.expect(TokenType::Colon).unwrap_err();
        assert_eq!(
            err,
            ParserError::UnexpectedToken {
                expected: "':'".to_string(),
                found: "'x'".to_string(),
                pos: 2,
            }
        );
    }

    #[test]
    fn test_finish_span_ends_at_previous_token() {
        let mut p = parser("ab  cd");
        let start = p.start_pos();
        p.next().unwrap();
        let span = p.finish_span(start);
        assert_eq!(span.range(), 0..2);
        assert_eq!(span.loc.end.column, 2);
    }

    #[test]
    fn test_semicolon_insertion_needs_statement_context() {
        let p = parser("a\nb");
        assert!(!p.can_insert_semicolon());

        let cursor = TokenStream::new("a\n++b", &Options::default()).unwrap();
        let mut p = Parser::new(
            cursor,
            ParserContext {
                statement_terminators: true,
                ..ParserContext::default()
            },
        );
        assert!(!p.can_insert_semicolon());
        p.next().unwrap();
        assert!(p.can_insert_semicolon());
    }

    #[test]
    fn test_module_option_sets_strict_context() {
        let p = Parser::from_source("x", &Options::default().with_module(true)).unwrap();
        assert!(p.context().strict);
    }

    #[test]
    fn test_nested_restores_depth() {
        let mut p = parser("x");
        let depth = p.nested(|p| p.nested(|p| Ok(p.depth))).unwrap();
        assert_eq!(depth, 2);
        assert_eq!(p.depth, 0);

        let err = p
            .nested(|p| -> ParseResult<()> { Err(p.unexpected("nothing")) })
            .unwrap_err();
        assert!(matches!(err, ParserError::UnexpectedToken { .. }));
        assert_eq!(p.depth, 0);
    }

    #[test]
    fn test_nesting_limit() {
        let mut p = parser("x");
        p.depth = MAX_NESTING_DEPTH;
        assert_eq!(
            p.nested(|_| Ok(())),
            Err(ParserError::NestingTooDeep { pos: 0 })
        );
    }

    #[test]
    fn test_trailing_tokens_are_rejected() {
        let err = parser("1 2").parse_to_end().unwrap_err();
        assert_eq!(
            err,
            ParserError::UnexpectedToken {
                expected: "end of input".to_string(),
                found: "2".to_string(),
                pos: 2,
            }
        );
    }
}
