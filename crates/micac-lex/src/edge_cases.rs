//! Edge case and property tests for micac-lex.

use proptest::prelude::*;

use crate::token::{keyword_from_ident, LiteralKind, TokenKind};
use crate::{LexError, Lexer, Token};

fn lex_all(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).map(|t| t.unwrap()).collect()
}

/// Rebuilds the input from token spans plus the skipped gaps between them.
fn reconstruct(source: &str) -> String {
    let mut rebuilt = String::new();
    let mut prev_end = 0;

    let mut lexer = Lexer::new(source);
    loop {
        let token = lexer.next_token().unwrap();
        assert!(token.span.start >= prev_end, "spans must be monotonic");
        assert!(token.span.end <= source.len(), "spans must stay in bounds");

        rebuilt.push_str(&source[prev_end..token.span.start]);
        rebuilt.push_str(&source[token.span.start..token.span.end]);
        prev_end = token.span.end;

        if token.is_eof() {
            break;
        }
    }

    rebuilt
}

#[test]
fn test_edge_single_char_ident() {
    let tokens = lex_all("x");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].value, "x");
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let tokens = lex_all(&name);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, name);
    assert_eq!(tokens[0].span.len(), 10000);
}

#[test]
fn test_edge_adjacent_tokens() {
    let kinds: Vec<_> = lex_all("a+b").into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Add, TokenKind::Ident]);
}

#[test]
fn test_edge_digits_then_letters() {
    // maximal munch: "123abc" is an integer followed by an identifier
    let tokens = lex_all("123abc");
    assert_eq!(tokens[0].kind, TokenKind::Literal(LiteralKind::Integer));
    assert_eq!(tokens[0].value, "123");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_edge_keywords_not_idents() {
    let kinds: Vec<_> = lex_all("fn while iffy").into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Function, TokenKind::While, TokenKind::Ident]
    );
}

#[test]
fn test_edge_string_of_escapes_only() {
    let tokens = lex_all(r#""\n\n\n""#);
    assert_eq!(tokens[0].value, "\n\n\n");
}

#[test]
fn test_edge_crlf_line_tracking() {
    let tokens = lex_all("a\r\nb");
    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 1);
}

#[test]
fn test_edge_error_then_resume() {
    // halt-and-report is the default, but the cursor lands after the bad
    // character so a resynchronizing caller can keep pulling tokens
    let mut lexer = Lexer::new("a # b");
    assert_eq!(lexer.next_token().unwrap().value, "a");
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::InvalidCharacter { ch: '#', .. })
    ));
    assert_eq!(lexer.next_token().unwrap().value, "b");
    assert!(lexer.next_token().unwrap().is_eof());
}

#[test]
fn test_edge_error_spans_point_into_source() {
    let mut lexer = Lexer::new("ok\n  \"open");
    lexer.next_token().unwrap();

    let err = lexer.next_token().unwrap_err();
    let span = err.span();
    assert_eq!(span.start, 5);
    assert_eq!(span.end, 10);
    assert_eq!(span.line, 2);
    assert_eq!(span.column, 3);
}

#[test]
fn test_roundtrip_program() {
    let source = r#"
        // compute the answer
        fn answer() {
            x := 6 * 7; /* the usual */
            if x >= 42 { return x; }
            return 0;
        }
        msg := "done\n";
    "#;
    assert_eq!(reconstruct(source), source);
}

#[test]
fn test_roundtrip_operators_and_literals() {
    let source = "a<<=2;b>>=1;c:=3.14;d&=e|f^g;s:=\"x\\ty\"";
    assert_eq!(reconstruct(source), source);
}

proptest! {
    #[test]
    fn prop_identifier_lexes_whole_match(ident in "[A-Za-z_][A-Za-z0-9_]{0,30}") {
        prop_assume!(keyword_from_ident(&ident).is_none());

        let mut lexer = Lexer::new(&ident);
        let token = lexer.next_token().unwrap();
        prop_assert_eq!(token.kind, TokenKind::Ident);
        prop_assert_eq!(token.value.as_ref(), ident.as_str());
        prop_assert_eq!(token.span.len(), ident.len());
        prop_assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn prop_integer_lexes_whole_match(n: u64) {
        let source = n.to_string();
        let mut lexer = Lexer::new(&source);
        let token = lexer.next_token().unwrap();
        prop_assert_eq!(token.kind, TokenKind::Literal(LiteralKind::Integer));
        prop_assert_eq!(token.value.as_ref(), source.as_str());
        prop_assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn prop_escape_free_string_roundtrips(content in "[A-Za-z0-9 ]{0,40}") {
        let source = format!("\"{content}\"");
        let mut lexer = Lexer::new(&source);
        let token = lexer.next_token().unwrap();
        prop_assert_eq!(token.kind, TokenKind::Literal(LiteralKind::String));
        prop_assert_eq!(token.value.as_ref(), content.as_str());
        prop_assert_eq!(token.span.len(), source.len());
    }

    #[test]
    fn prop_spans_partition_input(source in "[ \t\nA-Za-z0-9_;(){},+*%!&|^<>=-]{0,64}") {
        // every generated character either joins a token or is skipped
        // whitespace, so the span reconstruction must be exact
        prop_assert_eq!(reconstruct(&source), source);
    }
}
