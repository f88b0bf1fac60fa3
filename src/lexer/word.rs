//! Identifiers, keywords and `\u` escapes inside names.

use super::chars::{is_identifier_char, is_identifier_start};
use super::token::TokenValue;
use super::token_type::TokenType;
use super::tokenizer::Tokenizer;
use super::LexResult;
use crate::error::LexerError;

const MAX_CODE_POINT: u32 = 0x10FFFF;

impl Tokenizer<'_> {
    /// Read an identifier or keyword token. A word spelled with an escape is
    /// always a plain name.
    pub(super) fn read_word(&mut self) -> LexResult<()> {
        let word = self.read_word1()?;
        let ty = match TokenType::keyword(&word) {
            Some(keyword) if !self.state.contains_esc => keyword,
            _ => TokenType::Name,
        };
        self.finish_token(ty, TokenValue::Str(word));
        Ok(())
    }

    /// Read the characters of a word, decoding escapes. Plain runs are copied
    /// in chunks.
    fn read_word1(&mut self) -> LexResult<String> {
        self.state.contains_esc = false;
        let mut word = String::new();
        let mut first = true;
        let mut chunk_start = self.state.pos;

        while let Some(c) = self.char_at_pos() {
            if is_identifier_char(c) {
                self.state.pos += c.len_utf8();
            } else if c == '\\' {
                self.state.contains_esc = true;
                word.push_str(&self.input[chunk_start..self.state.pos]);

                let esc_start = self.state.pos;
                self.state.pos += 1;
                if self.byte_at(self.state.pos) != Some(b'u') {
                    return Err(LexerError::ExpectedUnicodeEscape {
                        pos: self.state.pos,
                    });
                }
                self.state.pos += 1;

                let valid: fn(char) -> bool = if first {
                    is_identifier_start
                } else {
                    is_identifier_char
                };
                let decoded = char::from_u32(self.read_code_point()?)
                    .filter(|&ch| valid(ch))
                    .ok_or(LexerError::InvalidUnicodeEscape { pos: esc_start })?;

                word.push(decoded);
                chunk_start = self.state.pos;
            } else {
                break;
            }
            first = false;
        }

        word.push_str(&self.input[chunk_start..self.state.pos]);
        Ok(word)
    }

    /// `XXXX` or `{X...}` after `\u`.
    fn read_code_point(&mut self) -> LexResult<u32> {
        if self.byte_at(self.state.pos) != Some(b'{') {
            return self.read_hex_char(4);
        }

        let code_pos = self.state.pos;
        self.state.pos += 1;
        let len = self.input[self.state.pos..]
            .find('}')
            .ok_or(LexerError::BadEscape {
                pos: self.state.pos,
            })?;
        let code = self.read_hex_char(len)?;
        self.state.pos += 1;

        if code > MAX_CODE_POINT {
            return Err(LexerError::CodePointOutOfBounds { pos: code_pos });
        }
        Ok(code)
    }

    fn read_hex_char(&mut self, len: usize) -> LexResult<u32> {
        let code_pos = self.state.pos;
        let n = self
            .read_int(16, Some(len))
            .ok_or(LexerError::BadEscape { pos: code_pos })?;
        Ok(u32::try_from(n).unwrap_or(u32::MAX))
    }
}
