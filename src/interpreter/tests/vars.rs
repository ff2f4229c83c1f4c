//! Tests for variable declaration, lookup, and assignment.

use super::*;

#[test]
fn test_var_with_initializer() {
    let interpreter = run("var a = 42;");
    assert_eq!(global(&interpreter, "a"), Value::Number(42.0));
}

#[test]
fn test_var_without_initializer_is_nil() {
    let interpreter = run("var a;");
    assert_eq!(global(&interpreter, "a"), Value::Nil);
}

#[test]
fn test_assignment_returns_the_assigned_value() {
    let interpreter = run("var a; var b = (a = 7);");
    assert_eq!(global(&interpreter, "a"), Value::Number(7.0));
    assert_eq!(global(&interpreter, "b"), Value::Number(7.0));
}

#[test]
fn test_chained_assignment() {
    let interpreter = run("var a; var b; a = b = 3;");
    assert_eq!(global(&interpreter, "a"), Value::Number(3.0));
    assert_eq!(global(&interpreter, "b"), Value::Number(3.0));
}

#[test]
fn test_undefined_variable_read_fails() {
    let error = run_error("ghost;");
    assert_eq!(error.message, "Undefined variable ghost.");
}

#[test]
fn test_undefined_variable_assignment_fails() {
    let error = run_error("ghost = 1;");
    assert_eq!(error.message, "Undefined variable ghost.");
}

#[test]
fn test_redeclaration_shadows_in_same_scope() {
    let interpreter = run("var a = 1; var a = \"two\";");
    assert_eq!(global(&interpreter, "a"), Value::Str("two".to_string()));
}

#[test]
fn test_initializer_sees_earlier_bindings() {
    let interpreter = run("var a = 2; var b = a * 3;");
    assert_eq!(global(&interpreter, "b"), Value::Number(6.0));
}

#[test]
fn test_error_reports_line_of_name_token() {
    let error = run_error("var a = 1;\n\nghost;");
    assert_eq!(error.line, 3);
}
