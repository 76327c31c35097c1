//! Whitespace and comment skipping.
//!
//! Mica uses `//` line comments and `/* */` block comments; block comments
//! nest. Comments and whitespace are skipped before every dispatch, so no
//! token ever starts inside either.

use micac_util::Span;

use crate::error::LexError;
use crate::Lexer;

impl<'src> Lexer<'src> {
    /// Skips whitespace and comments until a significant character or the
    /// end of the buffer is reached.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::UnterminatedComment`] if a block comment is
    /// still open at the end of the buffer.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => self.cursor.advance(),
                '/' => match self.cursor.peek_char(1) {
                    '/' => self.skip_line_comment(),
                    '*' => self.skip_block_comment()?,
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    /// Skips a line comment (from `//` to end of line).
    ///
    /// The trailing newline is left for the whitespace loop.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    /// Skips a block comment, tracking nesting with a depth counter.
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        self.cursor.advance();
        self.cursor.advance();
        let mut depth = 1u32;

        while depth > 0 {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedComment {
                    span: Span::new(start, self.cursor.position(), line, column),
                });
            }

            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '*' {
                self.cursor.advance();
                self.cursor.advance();
                depth += 1;
            } else if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }

        Ok(())
    }
}
