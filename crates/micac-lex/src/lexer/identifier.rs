//! Identifier and keyword scanning.

use crate::classify::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'src> Lexer<'src> {
    /// Scans an identifier or keyword.
    ///
    /// Consumes the maximal run of alphanumeric/underscore characters, then
    /// checks the result against the keyword table. Anything unmatched is a
    /// plain identifier carrying the scanned text.
    pub(crate) fn lex_identifier(&mut self) -> Token<'src> {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        self.make_token(keyword_from_ident(text).unwrap_or(TokenKind::Ident))
    }
}
