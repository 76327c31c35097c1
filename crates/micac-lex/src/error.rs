//! Lexical error types.
//!
//! Every error carries the span at which it was detected. The lexer never
//! panics on bad input and never reads past the source buffer; it hands one
//! of these variants back through `next_token`'s `Result` and leaves all
//! recovery decisions to the caller.

use micac_util::{
    Diagnostic, DiagnosticCode, Span, E_LEX_INVALID_CHAR, E_LEX_INVALID_ESCAPE,
    E_LEX_MALFORMED_NUMBER, E_LEX_UNTERMINATED_COMMENT, E_LEX_UNTERMINATED_STRING,
};
use thiserror::Error;

/// An error produced while scanning a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal was opened but the buffer ended before the closing
    /// quote.
    #[error("unterminated string literal")]
    UnterminatedString {
        /// From the opening quote to the end of the buffer.
        span: Span,
    },

    /// A number literal that does not follow the literal grammar, such as a
    /// trailing decimal point with no digits after it.
    #[error("malformed number literal")]
    MalformedNumber {
        /// The offending lexeme.
        span: Span,
    },

    /// A character outside the recognized token grammar.
    #[error("unexpected character '{ch}'")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its location.
        span: Span,
    },

    /// A block comment was opened but never closed.
    #[error("unterminated block comment")]
    UnterminatedComment {
        /// From the comment opener to the end of the buffer.
        span: Span,
    },

    /// An escape sequence the string grammar does not define.
    #[error("invalid escape sequence")]
    InvalidEscape {
        /// The backslash and what followed it.
        span: Span,
    },
}

impl LexError {
    /// The span at which the error was detected.
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedString { span }
            | Self::MalformedNumber { span }
            | Self::InvalidCharacter { span, .. }
            | Self::UnterminatedComment { span }
            | Self::InvalidEscape { span } => *span,
        }
    }

    /// The diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            Self::UnterminatedString { .. } => E_LEX_UNTERMINATED_STRING,
            Self::MalformedNumber { .. } => E_LEX_MALFORMED_NUMBER,
            Self::InvalidCharacter { .. } => E_LEX_INVALID_CHAR,
            Self::UnterminatedComment { .. } => E_LEX_UNTERMINATED_COMMENT,
            Self::InvalidEscape { .. } => E_LEX_INVALID_ESCAPE,
        }
    }

    /// Renders this error as a positioned diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// use micac_lex::Lexer;
    /// use micac_util::Handler;
    ///
    /// let mut lexer = Lexer::new("\"abc");
    /// let handler = Handler::new();
    /// if let Err(err) = lexer.next_token() {
    ///     handler.emit(err.to_diagnostic());
    /// }
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string(), self.span()).with_code(self.code());
        match self {
            Self::UnterminatedString { .. } => diag.with_help("add a closing '\"'"),
            Self::UnterminatedComment { .. } => diag.with_help("add a closing '*/'"),
            Self::MalformedNumber { .. } => {
                diag.with_help("a decimal point must be followed by at least one digit")
            },
            _ => diag,
        }
    }
}
