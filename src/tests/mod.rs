use super::*;

mod classifier;
mod let_bindings;
mod literals;
mod splitter;

// Shared test helpers

fn v(j: serde_json::Value) -> Value {
    Value::from(j)
}

fn eval_ok(input: serde_json::Value, program: &str) -> Value {
    let outcome = Interpreter::new().transform(&Value::from(input), program);
    assert!(outcome.success, "transform failed: {:?}", outcome.error);
    outcome.output.expect("success without output")
}

fn eval_err(input: serde_json::Value, program: &str) -> String {
    let outcome = Interpreter::new().transform(&Value::from(input), program);
    assert!(
        !outcome.success,
        "expected failure, got {:?}",
        outcome.output
    );
    outcome.error.expect("failure without error")
}
