//! Numeric literal grammar: decimal integers, floats with optional exponent,
//! and `0x`/`0b` radix integers.

use super::chars::is_identifier_start;
use super::token::{Number, TokenValue};
use super::token_type::TokenType;
use super::tokenizer::Tokenizer;
use super::LexResult;
use crate::error::LexerError;

impl Tokenizer<'_> {
    /// Read digits in `radix`. With `len` set, exactly that many digits must
    /// be present. Returns `None` when no digits (or the wrong count) were
    /// read. The value saturates instead of overflowing.
    pub(super) fn read_int(&mut self, radix: u32, len: Option<usize>) -> Option<u64> {
        let limit = len.unwrap_or(usize::MAX);
        let mut total: u64 = 0;
        let mut read = 0;

        while read < limit {
            let Some(digit) = self
                .byte_at(self.state.pos)
                .and_then(|b| char::from(b).to_digit(radix))
            else {
                break;
            };
            self.state.pos += 1;
            total = total
                .saturating_mul(u64::from(radix))
                .saturating_add(u64::from(digit));
            read += 1;
        }

        if read == 0 || len.is_some_and(|n| n != read) {
            return None;
        }
        Some(total)
    }

    pub(super) fn read_radix_number(&mut self, radix: u32) -> LexResult<()> {
        let start = self.state.start;
        self.state.pos += 2;

        let value = self
            .read_int(radix, None)
            .ok_or(LexerError::ExpectedRadixDigits {
                radix,
                pos: start + 2,
            })?;
        self.reject_identifier_after_number()?;

        let value = i64::try_from(value).map_err(|_| LexerError::NumberOutOfRange { pos: start })?;
        self.finish_token(TokenType::Num, TokenValue::Number(Number::Int(value)));
        Ok(())
    }

    /// Read a decimal integer or float. `starts_with_dot` is set for `.5`.
    pub(super) fn read_number(&mut self, starts_with_dot: bool) -> LexResult<()> {
        let start = self.state.pos;
        let mut is_float = false;

        if !starts_with_dot && self.read_int(10, None).is_none() {
            return Err(LexerError::InvalidNumber { pos: start });
        }

        if self.byte_at(self.state.pos) == Some(b'.') {
            self.state.pos += 1;
            self.read_int(10, None);
            is_float = true;
        }

        if matches!(self.byte_at(self.state.pos), Some(b'e' | b'E')) {
            self.state.pos += 1;
            if matches!(self.byte_at(self.state.pos), Some(b'+' | b'-')) {
                self.state.pos += 1;
            }
            if self.read_int(10, None).is_none() {
                return Err(LexerError::InvalidNumber { pos: start });
            }
            is_float = true;
        }

        self.reject_identifier_after_number()?;

        let text = &self.input[start..self.state.pos];
        let value = if is_float {
            text.parse::<f64>()
                .map(Number::Float)
                .map_err(|_| LexerError::InvalidNumber { pos: start })?
        } else {
            text.parse::<i64>()
                .map(Number::Int)
                .map_err(|_| LexerError::NumberOutOfRange { pos: start })?
        };

        self.finish_token(TokenType::Num, TokenValue::Number(value));
        Ok(())
    }

    fn reject_identifier_after_number(&self) -> LexResult<()> {
        if self.char_at_pos().is_some_and(is_identifier_start) {
            return Err(LexerError::IdentifierAfterNumber {
                pos: self.state.pos,
            });
        }
        Ok(())
    }
}
