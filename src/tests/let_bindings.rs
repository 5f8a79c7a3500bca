use super::{eval_err, eval_ok, v};
use crate::Value;
use serde_json::json;

#[test]
fn let_in_binds_for_the_body() {
    assert_eq!(eval_ok(json!({}), "let x = 1 in $x"), Value::Int(1));
    assert_eq!(
        eval_ok(json!({"n": 2}), "let x = .n in $x + 1"),
        Value::Int(3)
    );
}

#[test]
fn inner_bindings_shadow_outer_ones() {
    assert_eq!(
        eval_ok(json!({}), "let x = 1 in let x = 2 in $x"),
        Value::Int(2)
    );
}

#[test]
fn sibling_bindings_do_not_leak() {
    let out = eval_ok(
        json!({}),
        r#"let x = 1 in { "a": $x, "b": let x = 2 in $x, "c": $x }"#,
    );
    assert_eq!(out, v(json!({"a": 1, "b": 2, "c": 1})));
}

#[test]
fn binding_value_may_use_outer_scope() {
    assert_eq!(
        eval_ok(json!({}), "let x = 1 in let y = $x + 1 in $y"),
        Value::Int(2)
    );
}

#[test]
fn let_with_concatenation_in_an_object() {
    let out = eval_ok(
        json!({}),
        r#"let greeting = "hi" in { "msg": $greeting + ", world" }"#,
    );
    assert_eq!(out, v(json!({"msg": "hi, world"})));
}

#[test]
fn bare_let_returns_the_bound_value() {
    assert_eq!(eval_ok(json!({"n": 9}), "let x = .n"), Value::Int(9));
}

#[test]
fn flowed_let_chains_into_keyword_clauses() {
    let program = "let x = 5 let y = 6 if ($x >= 5) $y else 0";
    assert_eq!(eval_ok(json!({}), program), Value::Int(6));
}

#[test]
fn flowed_let_feeds_a_for_clause() {
    let program = "let n = 10 for (.xs) $n";
    assert_eq!(
        eval_ok(json!({"xs": [1, 2, 3]}), program),
        v(json!([10, 10, 10]))
    );
}

#[test]
fn undefined_variable_is_an_error() {
    assert_eq!(eval_err(json!({}), "$nope"), "Undefined variable: $nope");
}

#[test]
fn malformed_let_is_an_error() {
    let err = eval_err(json!({}), "let = 5");
    assert_eq!(
        err,
        "Invalid let syntax. Use: let variable = expression in expression"
    );
}

#[test]
fn variable_lookup_does_not_leak_between_calls() {
    let interp = crate::Interpreter::new();
    let input = Value::from(json!({}));
    assert!(interp.transform(&input, "let x = 1 in $x").success);
    let second = interp.transform(&input, "$x");
    assert!(!second.success);
    assert_eq!(second.error.as_deref(), Some("Undefined variable: $x"));
}
