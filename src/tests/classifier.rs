use crate::classify::*;

#[test]
fn literal_shapes() {
    assert!(is_string_literal(r#""hi""#));
    assert!(is_string_literal("'hi'"));
    assert!(!is_string_literal(r#""unterminated"#));
    assert!(!is_string_literal(r#"""#));

    assert!(is_number_literal("42"));
    assert!(is_number_literal("-7"));
    assert!(is_number_literal("3.25"));
    assert!(!is_number_literal("1.2.3"));
    assert!(!is_number_literal("1e3"));

    assert!(is_boolean_literal("true"));
    assert!(is_boolean_literal("false"));
    assert!(!is_boolean_literal("True"));
    assert!(is_null_literal("null"));
}

#[test]
fn constructor_and_reference_shapes() {
    assert!(is_object_ctor("{}"));
    assert!(is_object_ctor(r#"{ "a": 1 }"#));
    assert!(!is_object_ctor("{"));
    assert!(is_array_ctor("[1, 2]"));
    assert!(is_variable_ref("$x"));
    assert!(is_let("let x = 1"));
    assert!(!is_let("letx = 1"));
    assert!(is_if("if (.a) 1 else 2"));
    assert!(is_for("for (.xs) ."));
    assert!(is_path(".a.b"));
}

#[test]
fn function_call_shape_extracts_name_and_args() {
    assert_eq!(as_function_call("size(.x)"), Some(("size", ".x")));
    assert_eq!(as_function_call("size ()"), Some(("size", "")));
    assert_eq!(
        as_function_call(r#"string({"a": 1})"#),
        Some(("string", r#"{"a": 1}"#))
    );
    // Nested parentheses in the argument list are not recognized.
    assert_eq!(as_function_call("size(foo())"), None);
    assert!(!is_function_call("size(.x) > 2"));
}

#[test]
fn top_level_operator_detection() {
    assert!(has_top_level_op(".a == .b", &[" == "]));
    assert!(!has_top_level_op("{ \"a\": .a == .b }", &[" == "]));
    assert!(!has_top_level_op(r#"".a == .b""#, &[" == "]));
    assert!(has_top_level_op(".n > 3", &[" >= ", " <= ", " > "]));
}
