use indexmap::IndexMap;

use super::{Env, Evaluator};
use crate::classify;
use crate::error::EvalError;
use crate::scope::Scope;
use crate::split;
use crate::value::Value;

/// `{ key: expr, ... }` object construction.
pub(crate) struct ObjectEvaluator;

impl Evaluator for ObjectEvaluator {
    fn priority(&self) -> u32 {
        70
    }

    fn can_evaluate(&self, expr: &str) -> bool {
        classify::is_object_ctor(expr)
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
            return Ok(Value::Object(IndexMap::new()));
        }

        let mut result = IndexMap::new();
        for pair in split::split_object_pairs(content) {
            // The key is everything before the first colon; duplicate keys
            // are last-write-wins.
            let Some((key_part, value_part)) = pair.split_once(':') else {
                return Err(EvalError::Syntax(format!("Invalid object pair: {pair}")));
            };
            let key = unquote_key(key_part.trim());
            let value = env.eval(value_part, ctx, scope)?;
            result.insert(key, value);
        }
        Ok(Value::Object(result))
    }
}

fn unquote_key(key: &str) -> String {
    if key.len() >= 2
        && ((key.starts_with('"') && key.ends_with('"'))
            || (key.starts_with('\'') && key.ends_with('\'')))
    {
        key[1..key.len() - 1].to_string()
    } else {
        key.to_string()
    }
}
