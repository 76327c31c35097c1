//! micac-util - Core Utilities and Foundation Types
//!
//! This crate provides the fundamental types shared by every phase of the
//! micac compiler: source location tracking ([`Span`]) and the diagnostic
//! infrastructure ([`Diagnostic`], [`Handler`]) used to report positioned
//! errors and warnings to the user.
//!
//! # Example
//!
//! ```
//! use micac_util::{Diagnostic, Handler, Span, E_LEX_INVALID_CHAR};
//!
//! let handler = Handler::new();
//! let span = Span::new(3, 4, 1, 4);
//! handler.emit(
//!     Diagnostic::error("unexpected character '#'", span).with_code(E_LEX_INVALID_CHAR),
//! );
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticCode, Handler, Level, E_LEX_INVALID_CHAR, E_LEX_INVALID_ESCAPE,
    E_LEX_MALFORMED_NUMBER, E_LEX_UNTERMINATED_COMMENT, E_LEX_UNTERMINATED_STRING,
};
pub use span::Span;

// Re-export the hash map used throughout the compiler
pub use rustc_hash::FxHashMap;
