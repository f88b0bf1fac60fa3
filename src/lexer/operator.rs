//! Readers for punctuation and operator families that need lookahead.
//!
//! Each reader is entered with the cursor on the first character of the
//! token and finishes exactly one token.

use super::token::TokenValue;
use super::token_type::TokenType;
use super::tokenizer::Tokenizer;
use super::LexResult;
use crate::options::Plugin;

impl Tokenizer<'_> {
    /// `.5`, `...` or `.`
    pub(super) fn read_token_dot(&mut self) -> LexResult<()> {
        let pos = self.state.pos;
        let next = self.byte_at(pos + 1);
        if next.is_some_and(|b| b.is_ascii_digit()) {
            return self.read_number(true);
        }

        if next == Some(b'.') && self.byte_at(pos + 2) == Some(b'.') {
            self.state.pos += 3;
            self.finish_token(TokenType::Ellipsis, TokenValue::None);
        } else {
            self.finish_punct(TokenType::Dot);
        }
        Ok(())
    }

    pub(super) fn read_token_slash(&mut self) {
        if self.byte_at(self.state.pos + 1) == Some(b'=') {
            self.finish_op(TokenType::Assign, 2);
        } else {
            self.finish_op(TokenType::Slash, 1);
        }
    }

    /// `%`, `*`, `**` and their `=` forms.
    pub(super) fn read_token_mult_modulo(&mut self, c: char) {
        let mut ty = if c == '*' { TokenType::Star } else { TokenType::Modulo };
        let mut width = 1;
        let mut next = self.byte_at(self.state.pos + 1);

        if c == '*' && next == Some(b'*') {
            width += 1;
            next = self.byte_at(self.state.pos + 2);
            ty = TokenType::Exponent;
        }

        if next == Some(b'=') {
            width += 1;
            ty = TokenType::Assign;
        }

        self.finish_op(ty, width);
    }

    /// `|`, `&`, `||`, `&&`, `|=`, `&=`
    pub(super) fn read_token_pipe_amp(&mut self, c: char) {
        let next = self.byte_at(self.state.pos + 1);
        let pipe = c == '|';

        if next == Some(c as u8) {
            let ty = if pipe { TokenType::LogicalOr } else { TokenType::LogicalAnd };
            self.finish_op(ty, 2);
        } else if next == Some(b'=') {
            self.finish_op(TokenType::Assign, 2);
        } else {
            let ty = if pipe { TokenType::BitwiseOr } else { TokenType::BitwiseAnd };
            self.finish_op(ty, 1);
        }
    }

    pub(super) fn read_token_caret(&mut self) {
        if self.byte_at(self.state.pos + 1) == Some(b'=') {
            self.finish_op(TokenType::Assign, 2);
        } else {
            self.finish_op(TokenType::BitwiseXor, 1);
        }
    }

    /// `+`, `-`, `++`, `--`, `+=`, `-=`. A `-->` comment never reaches here.
    pub(super) fn read_token_plus_min(&mut self, c: char) {
        let next = self.byte_at(self.state.pos + 1);

        if next == Some(c as u8) {
            self.finish_op(TokenType::IncDec, 2);
        } else if next == Some(b'=') {
            self.finish_op(TokenType::Assign, 2);
        } else {
            self.finish_op(TokenType::PlusMin, 1);
        }
    }

    /// Relational and shift operators, including `>>>` and the shift
    /// assignments.
    pub(super) fn read_token_lt_gt(&mut self, c: char) {
        let pos = self.state.pos;
        let next = self.byte_at(pos + 1);

        if next == Some(c as u8) {
            let size = if c == '>' && self.byte_at(pos + 2) == Some(b'>') { 3 } else { 2 };
            if self.byte_at(pos + size) == Some(b'=') {
                self.finish_op(TokenType::Assign, size + 1);
            } else {
                self.finish_op(TokenType::BitShift, size);
            }
            return;
        }

        let size = if next == Some(b'=') { 2 } else { 1 };
        self.finish_op(TokenType::Relational, size);
    }

    /// `=`, `==`, `===`, `=>`, `!`, `!=`, `!==`
    pub(super) fn read_token_eq_excl(&mut self, c: char) {
        let pos = self.state.pos;
        let next = self.byte_at(pos + 1);

        if next == Some(b'=') {
            let size = if self.byte_at(pos + 2) == Some(b'=') { 3 } else { 2 };
            self.finish_op(TokenType::Equality, size);
        } else if c == '=' && next == Some(b'>') {
            self.state.pos += 2;
            self.finish_token(TokenType::Arrow, TokenValue::None);
        } else {
            let ty = if c == '=' { TokenType::Eq } else { TokenType::Prefix };
            self.finish_op(ty, 1);
        }
    }

    /// `:` or, with the function-bind plugin, `::`.
    pub(super) fn read_token_colon(&mut self) {
        if self.has_plugin(Plugin::FunctionBind) && self.byte_at(self.state.pos + 1) == Some(b':')
        {
            self.finish_op(TokenType::DoubleColon, 2);
        } else {
            self.finish_punct(TokenType::Colon);
        }
    }
}
