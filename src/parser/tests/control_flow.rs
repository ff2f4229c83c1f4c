//! Tests for `for` desugaring and `break`/`return` placement rules.

use super::*;

#[test]
fn test_full_for_desugars_to_block_while_block() {
    let statements = parse_program("for (var i = 0; i < 3; i = i + 1) print i;");
    // { var i = 0; while (i < 3) { print i; i = i + 1; } }
    match &statements[0] {
        Stmt::Block(outer) => {
            assert_eq!(outer.len(), 2);
            assert!(matches!(outer[0], Stmt::Var { .. }));
            match &outer[1] {
                Stmt::While { body, .. } => match &**body {
                    Stmt::Block(inner) => {
                        assert_eq!(inner.len(), 2);
                        assert!(matches!(inner[0], Stmt::Print(_)));
                        assert!(matches!(
                            inner[1],
                            Stmt::Expression(Expr::Assign { .. })
                        ));
                    }
                    other => panic!("Expected a desugared loop body block, got {:?}", other),
                },
                other => panic!("Expected a while statement, got {:?}", other),
            }
        }
        other => panic!("Expected a block, got {:?}", other),
    }
}

#[test]
fn test_for_without_clauses_is_bare_while_true() {
    let statements = parse_program("for (;;) break;");
    match &statements[0] {
        Stmt::While { condition, body } => {
            assert_eq!(condition, &Expr::Literal(LiteralValue::Bool(true)));
            assert!(matches!(**body, Stmt::Break(_)));
        }
        other => panic!("Expected a while statement, got {:?}", other),
    }
}

#[test]
fn test_for_without_initializer_has_no_outer_block() {
    let statements = parse_program("for (; running;) tick();");
    assert!(matches!(statements[0], Stmt::While { .. }));
}

#[test]
fn test_for_with_expression_initializer() {
    let statements = parse_program("for (i = 0; i < 3;) print i;");
    match &statements[0] {
        Stmt::Block(outer) => {
            assert!(matches!(
                outer[0],
                Stmt::Expression(Expr::Assign { .. })
            ));
        }
        other => panic!("Expected a block, got {:?}", other),
    }
}

#[test]
fn test_break_inside_while() {
    let statements = parse_program("while (true) break;");
    match &statements[0] {
        Stmt::While { body, .. } => assert!(matches!(**body, Stmt::Break(_))),
        other => panic!("Expected a while statement, got {:?}", other),
    }
}

#[test]
fn test_break_inside_nested_block_in_loop() {
    parse_program("while (true) { { break; } }");
}

#[test]
fn test_break_outside_loop_is_an_error() {
    let errors = parse_errors("break;");
    assert_eq!(errors[0].message, "Cannot use 'break' outside of a loop.");
    assert_eq!(errors[0].lexeme, "break");
}

#[test]
fn test_break_inside_function_inside_loop_is_an_error() {
    // The function body is a new break scope even inside a loop.
    let errors = parse_errors("while (true) { fun f() { break; } }");
    assert_eq!(errors[0].message, "Cannot use 'break' outside of a loop.");
}

#[test]
fn test_return_outside_function_is_an_error() {
    let errors = parse_errors("return 1;");
    assert_eq!(
        errors[0].message,
        "Cannot use 'return' outside of a function."
    );
}

#[test]
fn test_break_error_does_not_stop_parsing() {
    let (statements, errors) = parse_source("break; print 1;");
    assert_eq!(errors.len(), 1);
    assert_eq!(statements.len(), 2);
}
