use super::eval_ok;
use crate::Value;
use serde_json::json;

#[test]
fn string_literals_strip_their_quotes() {
    assert_eq!(eval_ok(json!({}), r#""hello""#), Value::Str("hello".into()));
    assert_eq!(eval_ok(json!({}), "'hello'"), Value::Str("hello".into()));
    assert_eq!(eval_ok(json!({}), r#""it's fine""#), Value::Str("it's fine".into()));
}

#[test]
fn numbers_without_a_dot_are_integers() {
    assert_eq!(eval_ok(json!({}), "42"), Value::Int(42));
    assert_eq!(eval_ok(json!({}), "-7"), Value::Int(-7));
    assert!(matches!(eval_ok(json!({}), "2.0"), Value::Double(_)));
    assert_eq!(eval_ok(json!({}), "-0.5"), Value::Double(-0.5));
}

#[test]
fn keyword_literals() {
    assert_eq!(eval_ok(json!({}), "true"), Value::Bool(true));
    assert_eq!(eval_ok(json!({}), "false"), Value::Bool(false));
    assert_eq!(eval_ok(json!({}), "null"), Value::Null);
}
