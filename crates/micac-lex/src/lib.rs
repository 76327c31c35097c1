//! micac-lex - Lexical Analyzer for the Mica Programming Language
//!
//! This crate provides the lexer (tokenizer) for the Mica programming
//! language. It transforms source text into the stream of classified
//! tokens consumed by the parser.
//!
//! # Example Usage
//!
//! ```
//! use micac_lex::{Lexer, TokenKind};
//!
//! let source = "x := 42;";
//! let mut lexer = Lexer::new(source);
//!
//! // Get tokens one at a time
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Ident);
//!
//! // Or iterate over the rest of the stream
//! for token in &mut lexer {
//!     println!("{:?}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`classify`] - Character classification predicates
//! - [`error`] - Lexical error types
//!
//! # Token Categories
//!
//! The lexer produces the following token types:
//!
//! ## Keywords
//!
//! `fn`, `while`, `if`, `else`, `return` — plus `true` and `false`, which
//! come out as boolean literals rather than dedicated kinds.
//!
//! ## Identifiers
//!
//! Names for variables and functions. Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0`, `123456`
//! - **Float**: `3.14`, `0.5`
//! - **String**: `"hello"`, `"line\n"` (escapes `\" \\ \n \r \t \xNN`)
//! - **Boolean**: `true`, `false`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Bitwise**: `&`, `|`, `^`, `<<`, `>>`
//! - **Assignment**: `=`, `:=`, `+=`, `-=`, `*=`, `/=`, `%=`, `&=`, `|=`,
//!   `^=`, `<<=`, `>>=` — all one [`TokenKind::Assign`] kind, tagged with
//!   which operator matched
//!
//! ## Delimiters
//!
//! `()`, `{}`, `[]`, `,`, `;`, `\`
//!
//! ## Special
//!
//! - **EOF**: End of file marker, returned on every call past the end
//!
//! # Errors
//!
//! [`Lexer::next_token`] returns `Result`; bad input surfaces as a
//! positioned [`LexError`] rather than a panic or a wrong token. The lexer
//! never retries — recovery policy belongs to the caller.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{
    keyword_from_ident, AssignmentKind, InfixKind, LiteralKind, PrefixKind, Token, TokenKind,
};
