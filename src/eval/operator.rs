use std::cmp::Ordering;

use super::{Env, Evaluator};
use crate::classify;
use crate::error::EvalError;
use crate::scope::Scope;
use crate::split;
use crate::value::Value;

// Longer operators first so ` >= ` is never read as ` > `.
const COMPARISONS: [&str; 6] = [" >= ", " <= ", " > ", " < ", " == ", " != "];
const ALL_OPS: [&str; 7] = [" >= ", " <= ", " > ", " < ", " == ", " != ", " + "];

/// Binary comparison and addition/concatenation at the top level of an
/// expression.
pub(crate) struct OperatorEvaluator;

impl Evaluator for OperatorEvaluator {
    fn priority(&self) -> u32 {
        80
    }

    fn can_evaluate(&self, expr: &str) -> bool {
        // Constructors and control flow own their internal operators.
        if expr.starts_with('{') || expr.starts_with('[') {
            return false;
        }
        if classify::is_if(expr) || classify::is_for(expr) {
            return false;
        }
        classify::has_top_level_op(expr, &ALL_OPS)
    }

    fn evaluate(
        &self,
        expr: &str,
        ctx: &Value,
        scope: &Scope,
        env: &Env,
    ) -> Result<Value, EvalError> {
        for op in COMPARISONS {
            if let Some(pos) = split::find_top_level(expr, op) {
                let left = &expr[..pos];
                let right = &expr[pos + op.len()..];
                return eval_comparison(op.trim(), left, right, ctx, scope, env);
            }
        }
        if classify::has_top_level_op(expr, &[" + "]) {
            return eval_addition(expr, ctx, scope, env);
        }
        Err(EvalError::Syntax(format!(
            "Invalid operator expression: {expr}"
        )))
    }
}

fn eval_comparison(
    op: &str,
    left_expr: &str,
    right_expr: &str,
    ctx: &Value,
    scope: &Scope,
    env: &Env,
) -> Result<Value, EvalError> {
    let left = env.eval(left_expr, ctx, scope)?;
    let right = env.eval(right_expr, ctx, scope)?;
    let outcome = match op {
        "==" => left == right,
        "!=" => left != right,
        // Ordering against null is false, never an error.
        _ if matches!(left, Value::Null) || matches!(right, Value::Null) => false,
        _ => match left.compare(&right) {
            Some(ord) => match op {
                ">=" => ord != Ordering::Less,
                "<=" => ord != Ordering::Greater,
                ">" => ord == Ordering::Greater,
                "<" => ord == Ordering::Less,
                _ => false,
            },
            // Incomparable types are false as well.
            None => false,
        },
    };
    Ok(Value::Bool(outcome))
}

fn eval_addition(expr: &str, ctx: &Value, scope: &Scope, env: &Env) -> Result<Value, EvalError> {
    let parts = split::split_addition(expr);
    if parts.len() == 1 {
        return env.eval(&parts[0], ctx, scope);
    }

    let mut values = Vec::with_capacity(parts.len());
    for part in &parts {
        values.push(env.eval(part, ctx, scope)?);
    }

    // Any string part turns the whole chain into concatenation.
    if values.iter().any(|v| matches!(v, Value::Str(_))) {
        return Ok(Value::Str(concat(&values)));
    }

    // A purely numeric chain sums; null contributes nothing and any double
    // promotes the result.
    if values
        .iter()
        .all(|v| matches!(v, Value::Null | Value::Int(_) | Value::Double(_)))
    {
        if values.iter().any(|v| matches!(v, Value::Double(_))) {
            let sum = values.iter().filter_map(Value::as_f64).sum::<f64>();
            return Ok(Value::Double(sum));
        }
        let mut sum = 0i64;
        for v in &values {
            if let Value::Int(i) = v {
                sum = sum.saturating_add(*i);
            }
        }
        return Ok(Value::Int(sum));
    }

    Ok(Value::Str(concat(&values)))
}

fn concat(values: &[Value]) -> String {
    let mut out = String::new();
    for v in values {
        out.push_str(&v.render());
    }
    out
}
