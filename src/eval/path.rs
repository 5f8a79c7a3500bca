use super::{Env, Evaluator};
use crate::classify;
use crate::error::EvalError;
use crate::scope::Scope;
use crate::value::Value;

/// `.a.b[1].c` navigation against the current context.
pub(crate) struct PathEvaluator;

impl Evaluator for PathEvaluator {
    fn priority(&self) -> u32 {
        50
    }

    fn can_evaluate(&self, expr: &str) -> bool {
        classify::is_path(expr)
    }

    fn evaluate(
        &self,
        expr: &str,
        ctx: &Value,
        _scope: &Scope,
        _env: &Env,
    ) -> Result<Value, EvalError> {
        Ok(resolve_path(expr, ctx))
    }
}

/// Walk a path expression against `value`. Total: absent fields, bad
/// indices, and shape mismatches all yield `Null`, never an error.
pub(crate) fn resolve_path(path: &str, value: &Value) -> Value {
    if path == "." {
        return value.clone();
    }

    let mut current = value;
    let mut rest = &path[1..];
    loop {
        // Field segment; absent when an index follows directly.
        let seg_end = rest.find(['.', '[']).unwrap_or(rest.len());
        let name = &rest[..seg_end];
        rest = &rest[seg_end..];
        if !name.is_empty() {
            current = match current {
                Value::Object(kv) => match kv.get(name) {
                    Some(v) => v,
                    None => return Value::Null,
                },
                _ => return Value::Null,
            };
        } else if !rest.starts_with('[') {
            return Value::Null;
        }

        // Any run of `[i]` segments, e.g. `.grid[1][2]`.
        while let Some(after) = rest.strip_prefix('[') {
            let Some(close) = after.find(']') else {
                return Value::Null;
            };
            let Ok(index) = after[..close].parse::<usize>() else {
                return Value::Null;
            };
            current = match current {
                Value::Array(xs) => match xs.get(index) {
                    Some(v) => v,
                    None => return Value::Null,
                },
                _ => return Value::Null,
            };
            rest = &after[close + 1..];
        }

        if rest.is_empty() {
            return current.clone();
        }
        match rest.strip_prefix('.') {
            // A trailing dot selects nothing further.
            Some("") => return current.clone(),
            Some(r) => rest = r,
            None => return Value::Null,
        }
    }
}
