//! Tests for block scoping and closure capture.

use super::*;

#[test]
fn test_block_scope_shadows_and_restores() {
    let interpreter = run(
        "var a = \"global\";\n\
         var seen;\n\
         { var a = \"local\"; seen = a; }\n\
         var after = a;",
    );
    assert_eq!(
        global(&interpreter, "seen"),
        Value::Str("local".to_string())
    );
    assert_eq!(
        global(&interpreter, "after"),
        Value::Str("global".to_string())
    );
}

#[test]
fn test_inner_block_can_assign_outer_variable() {
    let interpreter = run("var a = 1; { a = 2; }");
    assert_eq!(global(&interpreter, "a"), Value::Number(2.0));
}

#[test]
fn test_block_bindings_do_not_leak() {
    let error = run_error("{ var inner = 1; } inner;");
    assert_eq!(error.message, "Undefined variable inner.");
}

#[test]
fn test_environment_restored_after_runtime_error_in_block() {
    // The error unwinds out of the block; the outer binding must still
    // resolve afterwards on the same interpreter.
    let statements = parse("var a = 1; { var a = 2; a - \"x\"; }");
    let mut interpreter = Interpreter::new();
    assert!(interpreter.interpret(&statements).is_err());

    let followup = parse("var b = a;");
    interpreter.interpret(&followup).unwrap();
    assert_eq!(global(&interpreter, "b"), Value::Number(1.0));
}

#[test]
fn test_closure_captures_definition_environment() {
    let interpreter = run(
        "fun make_counter() {\n\
           var i = 0;\n\
           fun count() { i = i + 1; return i; }\n\
           return count;\n\
         }\n\
         var c = make_counter();\n\
         var first = c();\n\
         var second = c();\n\
         var third = c();",
    );
    assert_eq!(global(&interpreter, "first"), Value::Number(1.0));
    assert_eq!(global(&interpreter, "second"), Value::Number(2.0));
    assert_eq!(global(&interpreter, "third"), Value::Number(3.0));
}

#[test]
fn test_two_closures_share_one_captured_frame() {
    let interpreter = run(
        "fun make_pair() {\n\
           var n = 0;\n\
           fun bump() { n = n + 1; return n; }\n\
           fun read() { return n; }\n\
           bump();\n\
           return read;\n\
         }\n\
         var read = make_pair();\n\
         var value = read();",
    );
    assert_eq!(global(&interpreter, "value"), Value::Number(1.0));
}

#[test]
fn test_lexical_not_dynamic_scoping() {
    // f reads the x at its definition site, not its caller's x.
    let interpreter = run(
        "var x = \"lexical\";\n\
         fun f() { return x; }\n\
         fun g() { var x = \"dynamic\"; return f(); }\n\
         var seen = g();",
    );
    assert_eq!(
        global(&interpreter, "seen"),
        Value::Str("lexical".to_string())
    );
}

#[test]
fn test_closure_observes_later_mutation() {
    let interpreter = run(
        "var x = 1;\n\
         fun read() { return x; }\n\
         x = 2;\n\
         var seen = read();",
    );
    assert_eq!(global(&interpreter, "seen"), Value::Number(2.0));
}
