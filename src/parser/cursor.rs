//! トークンカーソル
//!
//! パーサーが依存するトークン列のインターフェースと、
//! [`Tokenizer`] を直接包む実装。

use crate::lexer::chars::contains_line_break;
use crate::lexer::{LexResult, Position, Token, Tokenizer};
use crate::options::Options;

/// パーサーから見たトークン列
pub trait TokenCursor {
    /// 現在のトークン
    fn current(&self) -> &Token;

    /// 直前のトークンの終了位置
    fn last_token_end(&self) -> Position;

    /// 次のトークンへ進む
    fn advance(&mut self) -> LexResult<()>;

    /// 解析中のソース全体
    fn input(&self) -> &str;

    /// 直前のトークンと現在のトークンの間に改行があるか
    fn has_line_break_before(&self) -> bool {
        let start = self.last_token_end().offset;
        let end = self.current().start;
        self.input()
            .get(start..end)
            .is_some_and(contains_line_break)
    }
}

/// トークナイザーから1トークンずつ読み出すカーソル
pub struct TokenStream<'src> {
    tokenizer: Tokenizer<'src>,
    current: Token,
}

impl<'src> TokenStream<'src> {
    /// 最初のトークンを読み込んだ状態で作成
    pub fn new(input: &'src str, options: &Options) -> LexResult<Self> {
        let mut tokenizer = Tokenizer::new(input, options);
        let current = tokenizer.next_token()?;
        Ok(Self { tokenizer, current })
    }
}

impl TokenCursor for TokenStream<'_> {
    fn current(&self) -> &Token {
        &self.current
    }

    fn last_token_end(&self) -> Position {
        self.tokenizer.state().last_token_end()
    }

    fn advance(&mut self) -> LexResult<()> {
        self.current = self.tokenizer.next_token()?;
        Ok(())
    }

    fn input(&self) -> &str {
        self.tokenizer.input()
    }
}
