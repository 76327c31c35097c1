//! String literal scanning.

use std::borrow::Cow;

use micac_util::Span;

use crate::classify::hex_digit_value;
use crate::error::LexError;
use crate::token::{LiteralKind, Token, TokenKind};
use crate::Lexer;

impl<'src> Lexer<'src> {
    /// Scans a string literal.
    ///
    /// Consumes characters until an unescaped closing quote, decoding the
    /// escape sequences `\"`, `\\`, `\n`, `\t`, `\r`, and `\xNN`. The token
    /// value borrows the inner text directly from the source when no escape
    /// occurs and only allocates when decoding changes the content. Raw
    /// newlines are literal content.
    pub(crate) fn lex_string(&mut self) -> Result<Token<'src>, LexError> {
        self.cursor.advance(); // opening quote
        let content_start = self.cursor.position();

        // Populated lazily on the first escape; until then the raw slice
        // and the decoded content are the same bytes.
        let mut decoded: Option<String> = None;

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedString {
                    span: self.token_span(),
                });
            }

            let c = self.cursor.current_char();

            if c == '"' {
                let raw = self.cursor.slice_from(content_start);
                self.cursor.advance(); // closing quote
                let value = match decoded {
                    Some(content) => Cow::Owned(content),
                    None => Cow::Borrowed(raw),
                };
                return Ok(Token {
                    kind: TokenKind::Literal(LiteralKind::String),
                    value,
                    span: self.token_span(),
                });
            }

            if c == '\\' {
                let decoded = decoded
                    .get_or_insert_with(|| self.cursor.slice_from(content_start).to_string());
                decoded.push(self.scan_escape()?);
            } else {
                self.cursor.advance();
                if let Some(decoded) = decoded.as_mut() {
                    decoded.push(c);
                }
            }
        }
    }

    /// Decodes one escape sequence, cursor on the backslash.
    fn scan_escape(&mut self) -> Result<char, LexError> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance(); // backslash

        if self.cursor.is_at_end() {
            return Err(LexError::UnterminatedString {
                span: self.token_span(),
            });
        }

        let c = self.cursor.current_char();
        self.cursor.advance();

        match c {
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            'x' => {
                let mut byte: u8 = 0;
                for _ in 0..2 {
                    if self.cursor.is_at_end() {
                        return Err(LexError::UnterminatedString {
                            span: self.token_span(),
                        });
                    }
                    match hex_digit_value(self.cursor.current_char()) {
                        Some(digit) => {
                            byte = (byte << 4) | digit;
                            self.cursor.advance();
                        },
                        None => {
                            self.cursor.advance();
                            return Err(LexError::InvalidEscape {
                                span: Span::new(start, self.cursor.position(), line, column),
                            });
                        },
                    }
                }
                Ok(byte as char)
            },
            _ => Err(LexError::InvalidEscape {
                span: Span::new(start, self.cursor.position(), line, column),
            }),
        }
    }
}
