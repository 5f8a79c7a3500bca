use super::{Env, Evaluator};
use crate::classify;
use crate::error::EvalError;
use crate::scope::Scope;
use crate::value::Value;

/// String, number, boolean, and null literals.
pub(crate) struct LiteralEvaluator;

impl Evaluator for LiteralEvaluator {
    fn priority(&self) -> u32 {
        40
    }

    fn can_evaluate(&self, expr: &str) -> bool {
        classify::is_string_literal(expr)
            || classify::is_number_literal(expr)
            || classify::is_boolean_literal(expr)
            || classify::is_null_literal(expr)
    }

    fn evaluate(
        &self,
        expr: &str,
        _ctx: &Value,
        _scope: &Scope,
        _env: &Env,
    ) -> Result<Value, EvalError> {
        if classify::is_string_literal(expr) {
            return Ok(Value::Str(expr[1..expr.len() - 1].to_string()));
        }
        if classify::is_number_literal(expr) {
            // No decimal point means integer; with one, double.
            return if expr.contains('.') {
                expr.parse::<f64>()
                    .map(Value::Double)
                    .map_err(|_| EvalError::Syntax(format!("Invalid number literal: {expr}")))
            } else {
                expr.parse::<i64>()
                    .map(Value::Int)
                    .map_err(|_| EvalError::Syntax(format!("Invalid number literal: {expr}")))
            };
        }
        match expr {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            _ => Err(EvalError::Syntax(format!(
                "Invalid literal expression: {expr}"
            ))),
        }
    }
}
