use super::{Env, Evaluator};
use crate::classify;
use crate::error::EvalError;
use crate::scope::Scope;
use crate::split;
use crate::value::Value;

/// `name(args)` calls into the function registry. Arguments are evaluated
/// eagerly, in order, before the function runs.
pub(crate) struct FunctionCallEvaluator;

impl Evaluator for FunctionCallEvaluator {
    fn priority(&self) -> u32 {
        60
    }

    fn can_evaluate(&self, expr: &str) -> bool {
        classify::is_function_call(expr)
    }

    fn evaluate(
        &self,
        expr: &str,
        ctx: &Value,
        scope: &Scope,
        env: &Env,
    ) -> Result<Value, EvalError> {
        let (name, args_text) = classify::as_function_call(expr)
            .ok_or_else(|| EvalError::Syntax(format!("Invalid function call: {expr}")))?;
        let function = env
            .function(name)
            .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;

        let mut args = Vec::new();
        if !args_text.trim().is_empty() {
            for arg in split::split_function_args(args_text) {
                args.push(env.eval(&arg, ctx, scope)?);
            }
        }
        function.call(&args)
    }
}
