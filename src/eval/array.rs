use super::{Env, Evaluator};
use crate::classify;
use crate::error::EvalError;
use crate::scope::Scope;
use crate::split;
use crate::value::Value;

/// `[ expr, ... ]` array construction.
pub(crate) struct ArrayEvaluator;

impl Evaluator for ArrayEvaluator {
    fn priority(&self) -> u32 {
        70
    }

    fn can_evaluate(&self, expr: &str) -> bool {
        classify::is_array_ctor(expr)
    }

    fn evaluate(
        &self,
        expr: &str,
        ctx: &Value,
        scope: &Scope,
        env: &Env,
    ) -> Result<Value, EvalError> {
        let content = expr[1..expr.len() - 1].trim();
        if content.is_empty() {
            return Ok(Value::Array(Vec::new()));
        }

        let mut elements = Vec::new();
        for element in split::split_array_elements(content) {
            elements.push(env.eval(&element, ctx, scope)?);
        }
        Ok(Value::Array(elements))
    }
}
