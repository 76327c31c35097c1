//! Operator and assignment scanning.
//!
//! Each method consumes the longest operator that matches at the cursor,
//! so `<<=` is one token rather than `<<` followed by `=`. Compound forms
//! ending in `=` that are not comparison operators come out as
//! [`TokenKind::Assign`] with the matching [`AssignmentKind`].

use crate::error::LexError;
use crate::token::{AssignmentKind, Token, TokenKind};
use crate::Lexer;

impl<'src> Lexer<'src> {
    /// Scans `+` or `+=`.
    pub(crate) fn lex_plus(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Assign(AssignmentKind::AddAssign))
        } else {
            self.make_token(TokenKind::Add)
        }
    }

    /// Scans `-` or `-=`.
    pub(crate) fn lex_minus(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Assign(AssignmentKind::SubAssign))
        } else {
            self.make_token(TokenKind::Sub)
        }
    }

    /// Scans `*` or `*=`.
    pub(crate) fn lex_star(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Assign(AssignmentKind::MulAssign))
        } else {
            self.make_token(TokenKind::Mul)
        }
    }

    /// Scans `/` or `/=`.
    ///
    /// Comments never reach this method; `//` and `/*` are consumed during
    /// whitespace skipping before dispatch.
    pub(crate) fn lex_slash(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Assign(AssignmentKind::DivAssign))
        } else {
            self.make_token(TokenKind::Div)
        }
    }

    /// Scans `%` or `%=`.
    pub(crate) fn lex_percent(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Assign(AssignmentKind::ModAssign))
        } else {
            self.make_token(TokenKind::Mod)
        }
    }

    /// Scans `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Eq)
        } else {
            self.make_token(TokenKind::Assign(AssignmentKind::Assign))
        }
    }

    /// Scans `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Ne)
        } else {
            self.make_token(TokenKind::Not)
        }
    }

    /// Scans `<`, `<=`, `<<`, or `<<=`.
    pub(crate) fn lex_less(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Le)
        } else if self.cursor.match_char('<') {
            if self.cursor.match_char('=') {
                self.make_token(TokenKind::Assign(AssignmentKind::ShiftLeftAssign))
            } else {
                self.make_token(TokenKind::ShiftLeft)
            }
        } else {
            self.make_token(TokenKind::Lt)
        }
    }

    /// Scans `>`, `>=`, `>>`, or `>>=`.
    pub(crate) fn lex_greater(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Ge)
        } else if self.cursor.match_char('>') {
            if self.cursor.match_char('=') {
                self.make_token(TokenKind::Assign(AssignmentKind::ShiftRightAssign))
            } else {
                self.make_token(TokenKind::ShiftRight)
            }
        } else {
            self.make_token(TokenKind::Gt)
        }
    }

    /// Scans `&`, `&&`, or `&=`.
    pub(crate) fn lex_ampersand(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            self.make_token(TokenKind::And)
        } else if self.cursor.match_char('=') {
            self.make_token(TokenKind::Assign(AssignmentKind::BitAndAssign))
        } else {
            self.make_token(TokenKind::BitAnd)
        }
    }

    /// Scans `|`, `||`, or `|=`.
    pub(crate) fn lex_pipe(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            self.make_token(TokenKind::Or)
        } else if self.cursor.match_char('=') {
            self.make_token(TokenKind::Assign(AssignmentKind::BitOrAssign))
        } else {
            self.make_token(TokenKind::BitOr)
        }
    }

    /// Scans `^` or `^=`.
    pub(crate) fn lex_caret(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Assign(AssignmentKind::BitXorAssign))
        } else {
            self.make_token(TokenKind::BitXor)
        }
    }

    /// Scans `:=`.
    ///
    /// Mica has no bare-colon token, so a `:` not followed by `=` is an
    /// invalid character.
    pub(crate) fn lex_colon(&mut self) -> Result<Token<'src>, LexError> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Ok(self.make_token(TokenKind::Assign(AssignmentKind::ColonAssign)))
        } else {
            Err(LexError::InvalidCharacter {
                ch: ':',
                span: self.token_span(),
            })
        }
    }
}
