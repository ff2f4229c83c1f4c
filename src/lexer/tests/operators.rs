//! Tests for one-or-two-character operators.

use super::*;

#[test]
fn test_single_char_operators() {
    let kinds = scan_kinds("! = < >");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Bang,
            TokenKind::Equal,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_two_char_operators() {
    let kinds = scan_kinds("!= == <= >=");
    assert_eq!(
        kinds,
        vec![
            TokenKind::BangEqual,
            TokenKind::EqualEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_operator_maximal_munch() {
    // `===` scans as `==` then `=`, never `=` `==`.
    let kinds = scan_kinds("===");
    assert_eq!(
        kinds,
        vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]
    );
}

#[test]
fn test_bang_before_identifier() {
    let kinds = scan_kinds("!ready");
    assert_eq!(
        kinds,
        vec![TokenKind::Bang, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_two_char_operator_lexemes() {
    let tokens = scan("<=");
    assert_eq!(tokens[0].lexeme, "<=");
}
