//! Priority-ordered expression dispatch.
//!
//! There is no token stream or AST: each recursive step receives a trimmed
//! expression substring, and the first evaluator whose shape test accepts it
//! parses out subexpressions and recurses through [`Env::eval`].

use std::cell::Cell;
use std::collections::HashMap;

use log::trace;

use crate::error::EvalError;
use crate::functions::Function;
use crate::interpreter::Interpreter;
use crate::scope::Scope;
use crate::value::Value;

mod array;
mod control;
mod function;
mod literal;
mod object;
mod operator;
mod path;
mod variable;

/// One construct recognizer/executor.
///
/// The interpreter consults evaluators in descending [`priority`] order and
/// hands the expression to the first whose [`can_evaluate`] accepts it.
/// Custom evaluators can be added with
/// [`Interpreter::register_evaluator`](crate::Interpreter::register_evaluator).
///
/// [`priority`]: Evaluator::priority
/// [`can_evaluate`]: Evaluator::can_evaluate
pub trait Evaluator: Send + Sync {
    fn priority(&self) -> u32;
    fn can_evaluate(&self, expr: &str) -> bool;
    fn evaluate(
        &self,
        expr: &str,
        ctx: &Value,
        scope: &Scope,
        env: &Env,
    ) -> Result<Value, EvalError>;
}

/// Per-call evaluation state: the interpreter's read-only tables, the
/// call-scoped global variables, and the recursion guard. One `Env` lives
/// exactly as long as one `transform`/`validate` invocation.
pub struct Env<'a> {
    interp: &'a Interpreter,
    globals: HashMap<String, Value>,
    depth: Cell<usize>,
}

impl<'a> Env<'a> {
    pub(crate) fn new(interp: &'a Interpreter) -> Self {
        Self {
            interp,
            globals: HashMap::new(),
            depth: Cell::new(0),
        }
    }

    /// Call-scoped global variables; shadowed by any local binding.
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    pub fn function(&self, name: &str) -> Option<&dyn Function> {
        self.interp.function(name)
    }

    /// Evaluate one (sub)expression in `scope` with `ctx` bound to `.`.
    pub fn eval(&self, expr: &str, ctx: &Value, scope: &Scope) -> Result<Value, EvalError> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(EvalError::EmptyExpression);
        }
        let depth = self.depth.get() + 1;
        if depth > self.interp.options().max_depth {
            return Err(EvalError::RecursionLimit(self.interp.options().max_depth));
        }
        self.depth.set(depth);
        let result = self.dispatch(expr, ctx, scope);
        self.depth.set(depth - 1);
        result
    }

    fn dispatch(&self, expr: &str, ctx: &Value, scope: &Scope) -> Result<Value, EvalError> {
        for evaluator in self.interp.evaluators() {
            if evaluator.can_evaluate(expr) {
                trace!(
                    "priority {} evaluator takes {:?}",
                    evaluator.priority(),
                    expr
                );
                return evaluator.evaluate(expr, ctx, scope, self);
            }
        }
        Err(EvalError::UnknownConstruct(expr.to_string()))
    }
}

/// The evaluators every interpreter starts with.
pub(crate) fn builtin_evaluators() -> Vec<Box<dyn Evaluator>> {
    vec![
        Box::new(variable::VariableEvaluator),
        Box::new(control::ControlFlowEvaluator),
        Box::new(operator::OperatorEvaluator),
        Box::new(object::ObjectEvaluator),
        Box::new(array::ArrayEvaluator),
        Box::new(function::FunctionCallEvaluator),
        Box::new(path::PathEvaluator),
        Box::new(literal::LiteralEvaluator),
    ]
}
