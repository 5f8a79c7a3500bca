use once_cell::sync::Lazy;
use regex::Regex;

use super::{Env, Evaluator};
use crate::classify;
use crate::error::EvalError;
use crate::scope::Scope;
use crate::value::Value;

// Conditions are regex-delimited and therefore cannot contain `)`.
static IF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^if\s*\(\s*([^)]+?)\s*\)\s*(.+?)\s+else\s+(.+)$").unwrap());
static FOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^for\s*\(\s*([^)]+?)\s*\)\s*(.+)$").unwrap());

/// `if (cond) then else alt` and `for (array) body`.
pub(crate) struct ControlFlowEvaluator;

impl Evaluator for ControlFlowEvaluator {
    fn priority(&self) -> u32 {
        90
    }

    fn can_evaluate(&self, expr: &str) -> bool {
        classify::is_if(expr) || classify::is_for(expr)
    }

    fn evaluate(
        &self,
        expr: &str,
        ctx: &Value,
        scope: &Scope,
        env: &Env,
    ) -> Result<Value, EvalError> {
        if classify::is_if(expr) {
            eval_if(expr, ctx, scope, env)
        } else {
            eval_for(expr, ctx, scope, env)
        }
    }
}

fn eval_if(expr: &str, ctx: &Value, scope: &Scope, env: &Env) -> Result<Value, EvalError> {
    let caps = IF_RE
        .captures(expr)
        .ok_or_else(|| EvalError::Syntax("Invalid if expression syntax".into()))?;
    let cond = env.eval(&caps[1], ctx, scope)?;
    if cond.is_truthy() {
        env.eval(&caps[2], ctx, scope)
    } else {
        env.eval(&caps[3], ctx, scope)
    }
}

fn eval_for(expr: &str, ctx: &Value, scope: &Scope, env: &Env) -> Result<Value, EvalError> {
    let caps = FOR_RE
        .captures(expr)
        .ok_or_else(|| EvalError::Syntax("Invalid for loop syntax".into()))?;
    let subject = env.eval(&caps[1], ctx, scope)?;
    let Value::Array(items) = subject else {
        return Err(EvalError::ForRequiresArray);
    };
    // The body sees each element as its context; the scope is untouched.
    let body = &caps[2];
    let mut results = Vec::with_capacity(items.len());
    for item in &items {
        results.push(env.eval(body, item, scope)?);
    }
    Ok(Value::Array(results))
}
