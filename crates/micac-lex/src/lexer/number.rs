//! Number literal scanning.

use crate::error::LexError;
use crate::token::{LiteralKind, Token, TokenKind};
use crate::Lexer;

impl<'src> Lexer<'src> {
    /// Scans an integer or float literal.
    ///
    /// Consumes the maximal run of digits; a `.` followed by at least one
    /// further digit continues the scan as a float. A trailing `.` with no
    /// digit after it is a malformed number, not an integer followed by
    /// punctuation.
    pub(crate) fn lex_number(&mut self) -> Result<Token<'src>, LexError> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() != '.' {
            return Ok(self.make_token(TokenKind::Literal(LiteralKind::Integer)));
        }

        if !self.cursor.peek_char(1).is_ascii_digit() {
            // consume the dot so the error span covers the whole lexeme
            self.cursor.advance();
            return Err(LexError::MalformedNumber {
                span: self.token_span(),
            });
        }

        self.cursor.advance();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        Ok(self.make_token(TokenKind::Literal(LiteralKind::Float)))
    }
}
