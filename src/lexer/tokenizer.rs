//! Pull-based tokenizer for shell arithmetic.
//!
//! The tokenizer owns a single [`TokenizerState`] and produces one token per
//! step. Scanning is split across this file (dispatch, whitespace and
//! comments), `operator.rs`, `number.rs` and `word.rs`, each adding an
//! `impl Tokenizer` block.

use log::{debug, trace};

use super::chars::{contains_line_break, is_identifier_start, is_line_break, is_whitespace};
use super::token::{Position, Token, TokenValue};
use super::token_type::TokenType;
use super::LexResult;
use crate::error::LexerError;
use crate::options::{Options, Plugin};

/// Mutable scanner state: the cursor, the current token span and the span of
/// the token before it.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerState {
    pub pos: usize,
    pub cur_line: usize,
    pub cur_column: usize,
    /// Offset of the first character on the current line.
    pub line_start: usize,
    /// Offset up to which `cur_column` has been counted.
    pub column_offset: usize,

    pub start: usize,
    pub end: usize,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub ty: TokenType,
    pub value: TokenValue,

    pub last_tok_start: usize,
    pub last_tok_end: usize,
    pub last_tok_start_line: usize,
    pub last_tok_start_column: usize,
    pub last_tok_end_line: usize,
    pub last_tok_end_column: usize,

    /// Set when the last scanned word contained a `\u` escape.
    pub contains_esc: bool,
}

impl TokenizerState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            cur_line: 1,
            cur_column: 0,
            line_start: 0,
            column_offset: 0,
            start: 0,
            end: 0,
            start_line: 1,
            start_column: 0,
            end_line: 1,
            end_column: 0,
            ty: TokenType::Eof,
            value: TokenValue::None,
            last_tok_start: 0,
            last_tok_end: 0,
            last_tok_start_line: 1,
            last_tok_start_column: 0,
            last_tok_end_line: 1,
            last_tok_end_column: 0,
            contains_esc: false,
        }
    }

    pub fn last_token_end(&self) -> Position {
        Position {
            offset: self.last_tok_end,
            line: self.last_tok_end_line,
            column: self.last_tok_end_column,
        }
    }

    /// Shift the current token span into the `last_tok_*` fields.
    fn shift_last_token(&mut self) {
        self.last_tok_start = self.start;
        self.last_tok_end = self.end;
        self.last_tok_start_line = self.start_line;
        self.last_tok_start_column = self.start_column;
        self.last_tok_end_line = self.end_line;
        self.last_tok_end_column = self.end_column;
    }
}

impl Default for TokenizerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenizer over one input buffer.
///
/// As an [`Iterator`] it yields every token up to and including `eof`, then
/// `None` forever. It also stops after the first error. Restarting means
/// building a new tokenizer.
pub struct Tokenizer<'src> {
    pub(super) input: &'src str,
    pub(super) options: Options,
    pub(super) state: TokenizerState,
    done: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(input: &'src str, options: &Options) -> Self {
        Self {
            input,
            options: options.clone(),
            state: TokenizerState::new(),
            done: false,
        }
    }

    pub fn input(&self) -> &'src str {
        self.input
    }

    pub fn state(&self) -> &TokenizerState {
        &self.state
    }

    pub fn has_plugin(&self, plugin: Plugin) -> bool {
        self.options.has_plugin(plugin)
    }

    /// Scan the next token. Once the input is exhausted every call returns
    /// another `eof` token at the end of the input.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.state.shift_last_token();
        self.read_next_token()?;

        let token = Token::from(&self.state);
        trace!(
            "token {} at {}..{} ({}:{})",
            token,
            token.start,
            token.end,
            token.start_line,
            token.start_column
        );
        Ok(token)
    }

    fn read_next_token(&mut self) -> LexResult<()> {
        loop {
            self.skip_space();

            self.state.start = self.state.pos;
            self.state.start_line = self.state.cur_line;
            self.state.start_column = self.advance_column(self.state.pos);

            let Some(c) = self.char_at_pos() else {
                self.finish_token(TokenType::Eof, TokenValue::None);
                return Ok(());
            };

            if self.skip_html_comment()? {
                continue;
            }

            return self.read_token(c);
        }
    }

    fn read_token(&mut self, c: char) -> LexResult<()> {
        // `\` starts a word so that names may begin with a `\u` escape.
        if is_identifier_start(c) || c == '\\' {
            return self.read_word();
        }
        self.read_token_from_char(c)
    }

    fn read_token_from_char(&mut self, c: char) -> LexResult<()> {
        let pos = self.state.pos;
        match c {
            '.' => self.read_token_dot()?,

            '(' => self.finish_punct(TokenType::ParenL),
            ')' => self.finish_punct(TokenType::ParenR),
            ';' => self.finish_punct(TokenType::Semi),
            ',' => self.finish_punct(TokenType::Comma),
            '[' => self.finish_punct(TokenType::BracketL),
            ']' => self.finish_punct(TokenType::BracketR),
            '{' => self.finish_punct(TokenType::BraceL),
            '}' => self.finish_punct(TokenType::BraceR),
            ':' => self.read_token_colon(),
            '?' => self.finish_punct(TokenType::Question),
            '@' => self.finish_punct(TokenType::At),
            '`' => self.finish_punct(TokenType::BackQuote),

            '0' if matches!(self.byte_at(pos + 1), Some(b'x' | b'X')) => {
                self.read_radix_number(16)?
            }
            '0' if matches!(self.byte_at(pos + 1), Some(b'b' | b'B')) => {
                self.read_radix_number(2)?
            }
            '0'..='9' => self.read_number(false)?,

            '/' => self.read_token_slash(),
            '%' | '*' => self.read_token_mult_modulo(c),
            '|' | '&' => self.read_token_pipe_amp(c),
            '^' => self.read_token_caret(),
            '+' | '-' => self.read_token_plus_min(c),
            '<' | '>' => self.read_token_lt_gt(c),
            '=' | '!' => self.read_token_eq_excl(c),
            '~' => self.finish_op(TokenType::Prefix, 1),

            // Shell `#` comments are not recognised and end up here as well.
            _ => return Err(LexerError::UnexpectedCharacter { ch: c, pos }),
        }
        Ok(())
    }

    /// Skip whitespace and line breaks, counting lines. `\r\n` is one break.
    fn skip_space(&mut self) {
        while let Some(c) = self.char_at_pos() {
            if c == '\r' {
                self.state.pos += 1;
                if self.byte_at(self.state.pos) == Some(b'\n') {
                    self.state.pos += 1;
                }
                self.new_line();
            } else if is_line_break(c) {
                self.state.pos += c.len_utf8();
                self.new_line();
            } else if is_whitespace(c) {
                self.state.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn new_line(&mut self) {
        self.state.cur_line += 1;
        self.state.line_start = self.state.pos;
        self.state.cur_column = 0;
        self.state.column_offset = self.state.pos;
    }

    /// Skip an HTML-style line comment at the cursor. `-->` only counts when a
    /// line break separates it from the previous token; `<!--` is rejected
    /// in module code.
    fn skip_html_comment(&mut self) -> LexResult<bool> {
        let rest = &self.input[self.state.pos..];

        if rest.starts_with("-->")
            && contains_line_break(&self.input[self.state.last_tok_end..self.state.pos])
        {
            debug!("skipping `-->` comment at offset {}", self.state.pos);
            self.skip_line_comment(3);
            return Ok(true);
        }

        if rest.starts_with("<!--") {
            if self.options.module {
                return Err(LexerError::HtmlCommentInModule {
                    pos: self.state.pos,
                });
            }
            debug!("skipping `<!--` comment at offset {}", self.state.pos);
            self.skip_line_comment(4);
            return Ok(true);
        }

        Ok(false)
    }

    /// Skip `start_skip` bytes and the rest of the line. The line break itself
    /// is left for `skip_space`.
    fn skip_line_comment(&mut self, start_skip: usize) {
        self.state.pos += start_skip;
        while let Some(c) = self.char_at_pos() {
            if is_line_break(c) {
                break;
            }
            self.state.pos += c.len_utf8();
        }
    }

    /// Record the end of the current token. Every scan path ends here.
    pub(super) fn finish_token(&mut self, ty: TokenType, value: TokenValue) {
        let column = self.advance_column(self.state.pos);
        self.state.end = self.state.pos;
        self.state.end_line = self.state.cur_line;
        self.state.end_column = column;
        self.state.ty = ty;
        self.state.value = value;
    }

    /// Consume `size` bytes of operator text and finish with it as the value.
    pub(super) fn finish_op(&mut self, ty: TokenType, size: usize) {
        let end = self.state.pos + size;
        let text = self.input[self.state.pos..end].to_string();
        self.state.pos = end;
        self.finish_token(ty, TokenValue::Str(text));
    }

    pub(super) fn finish_punct(&mut self, ty: TokenType) {
        self.state.pos += 1;
        self.finish_token(ty, TokenValue::None);
    }

    pub(super) fn byte_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(offset).copied()
    }

    pub(super) fn char_at_pos(&self) -> Option<char> {
        self.input.get(self.state.pos..)?.chars().next()
    }

    /// Column of `offset`, which never lies before the last counted offset
    /// on the current line. Only the characters since then are counted.
    fn advance_column(&mut self, offset: usize) -> usize {
        let from = self.state.column_offset;
        if offset > from {
            self.state.cur_column += self.input[from..offset].chars().count();
            self.state.column_offset = offset;
        }
        self.state.cur_column
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.next_token();
        self.done = match &result {
            Ok(token) => token.ty == TokenType::Eof,
            Err(_) => true,
        };
        Some(result)
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}
