use once_cell::sync::Lazy;
use regex::Regex;

use super::{Env, Evaluator};
use crate::classify;
use crate::error::EvalError;
use crate::scope::Scope;
use crate::split;
use crate::value::Value;

static VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$(\w+)").unwrap());
static LET_IN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^let\s+(\w+)\s*=\s*(.+?)\s+in\s+(.+)$").unwrap());
static LET_HEAD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^let\s+(\w+)\s*=\s*").unwrap());

const ALL_OPS: [&str; 7] = [" >= ", " <= ", " > ", " < ", " == ", " != ", " + "];

/// Variable references and `let` bindings.
pub(crate) struct VariableEvaluator;

impl Evaluator for VariableEvaluator {
    fn priority(&self) -> u32 {
        100
    }

    fn can_evaluate(&self, expr: &str) -> bool {
        // A `$x` joined to an operator chain belongs to the operator
        // evaluator, not here.
        classify::is_let(expr)
            || (classify::is_variable_ref(expr) && !classify::has_top_level_op(expr, &ALL_OPS))
    }

    fn evaluate(
        &self,
        expr: &str,
        ctx: &Value,
        scope: &Scope,
        env: &Env,
    ) -> Result<Value, EvalError> {
        if expr.starts_with('$') {
            eval_variable_ref(expr, scope, env)
        } else {
            eval_let(expr, ctx, scope, env)
        }
    }
}

fn eval_variable_ref(expr: &str, scope: &Scope, env: &Env) -> Result<Value, EvalError> {
    let caps = VAR_RE
        .captures(expr)
        .ok_or_else(|| EvalError::Syntax(format!("Invalid variable reference: {expr}")))?;
    let name = &caps[1];
    if let Some(v) = scope.get(name) {
        return Ok(v.clone());
    }
    if let Some(v) = env.global(name) {
        return Ok(v.clone());
    }
    Err(EvalError::UndefinedVariable(name.to_string()))
}

fn eval_let(expr: &str, ctx: &Value, scope: &Scope, env: &Env) -> Result<Value, EvalError> {
    // `let name = value in body` binds for the body only.
    if let Some(caps) = LET_IN_RE.captures(expr) {
        let value = env.eval(&caps[2], ctx, scope)?;
        let inner = scope.bind(&caps[1], value);
        return env.eval(&caps[3], ctx, &inner);
    }

    // Flowed form: the tail runs to the next top-level `let`/`for`/`if`
    // clause or the end of input; an empty tail yields the value itself.
    let caps = LET_HEAD_RE.captures(expr).ok_or_else(|| {
        EvalError::Syntax("Invalid let syntax. Use: let variable = expression in expression".into())
    })?;
    let name = caps.get(1).map_or("", |m| m.as_str());
    let after = &expr[caps.get(0).map_or(0, |m| m.end())..];
    let (value_expr, tail) = split::split_let_tail(after);
    let value = env.eval(value_expr, ctx, scope)?;
    if tail.is_empty() {
        return Ok(value);
    }
    let inner = scope.bind(name, value);
    env.eval(tail, ctx, &inner)
}
