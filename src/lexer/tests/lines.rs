//! Tests for line number tracking.

use super::*;

#[test]
fn test_first_line_is_one() {
    let tokens = scan("print");
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn test_newline_increments_line() {
    let tokens = scan("one\ntwo\nthree");
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 3, 3]);
}

#[test]
fn test_eof_carries_final_line() {
    let tokens = scan("a\nb\n");
    assert_eq!(tokens.last().map(|t| t.line), Some(3));
}

#[test]
fn test_tokens_on_same_line_share_line() {
    let tokens = scan("a = 1;");
    assert!(tokens.iter().all(|t| t.line == 1));
}

#[test]
fn test_blank_lines_counted() {
    let tokens = scan("a\n\n\nb");
    assert_eq!(tokens[1].line, 4);
}
