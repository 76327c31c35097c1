//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct and its dispatch loop.

use std::borrow::Cow;

use micac_util::Span;

use crate::classify;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for Mica source code.
///
/// The lexer transforms source text into a stream of tokens, one
/// [`next_token`](Lexer::next_token) call at a time. It borrows the source
/// buffer for its whole lifetime, and the tokens it produces borrow from
/// the same buffer.
///
/// # Example
///
/// ```
/// use micac_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x := 42;");
///
/// let ident = lexer.next_token().unwrap();
/// assert_eq!(ident.kind, TokenKind::Ident);
/// assert_eq!(ident.value, "x");
/// ```
pub struct Lexer<'src> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over the given source code.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. Once the end of the buffer is reached, every further call
    /// returns a [`TokenKind::Eof`] token without reading past the end.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] when the input does not form a valid token;
    /// the cursor is left after the offending text, so a caller that wants
    /// to resynchronize can simply call `next_token` again.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        match self.cursor.current_char() {
            '(' => Ok(self.lex_single(TokenKind::LeftParen)),
            ')' => Ok(self.lex_single(TokenKind::RightParen)),
            '{' => Ok(self.lex_single(TokenKind::LeftBrace)),
            '}' => Ok(self.lex_single(TokenKind::RightBrace)),
            '[' => Ok(self.lex_single(TokenKind::LeftBracket)),
            ']' => Ok(self.lex_single(TokenKind::RightBracket)),
            ',' => Ok(self.lex_single(TokenKind::Comma)),
            ';' => Ok(self.lex_single(TokenKind::Semicolon)),
            '\\' => Ok(self.lex_single(TokenKind::Backslash)),
            '+' => Ok(self.lex_plus()),
            '-' => Ok(self.lex_minus()),
            '*' => Ok(self.lex_star()),
            '/' => Ok(self.lex_slash()),
            '%' => Ok(self.lex_percent()),
            '=' => Ok(self.lex_equals()),
            '!' => Ok(self.lex_bang()),
            '<' => Ok(self.lex_less()),
            '>' => Ok(self.lex_greater()),
            '&' => Ok(self.lex_ampersand()),
            '|' => Ok(self.lex_pipe()),
            '^' => Ok(self.lex_caret()),
            ':' => self.lex_colon(),
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if classify::is_ident_start(c) => Ok(self.lex_identifier()),
            c => {
                self.cursor.advance();
                Err(LexError::InvalidCharacter {
                    ch: c,
                    span: self.token_span(),
                })
            },
        }
    }

    /// Consumes one character and produces a token of the given kind.
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Builds a token of the given kind whose value is the lexeme scanned
    /// since `token_start`.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'src> {
        Token {
            kind,
            value: Cow::Borrowed(self.cursor.slice_from(self.token_start)),
            span: self.token_span(),
        }
    }

    /// The span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}
