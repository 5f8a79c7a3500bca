//! A small interpreter for a JSLT-style JSON-to-JSON transformation language.
//!
//! A program is a single expression, possibly multi-line and possibly with
//! `let` bindings, evaluated against an input document. Paths navigate the
//! current context, `{ }` and `[ ]` construct new values, `if`/`for` provide
//! control flow, and a handful of builtin functions cover conversions.
//!
//! ```
//! use jslt_lite::{Value, transform};
//!
//! let input = Value::from(serde_json::json!({"user": {"name": "Ada"}, "xs": [1, 2, 3]}));
//! let outcome = transform(&input, r#"{ "who": .user.name, "count": size(.xs) }"#);
//! assert!(outcome.success);
//! assert_eq!(
//!     outcome.output,
//!     Some(Value::from(serde_json::json!({"who": "Ada", "count": 3})))
//! );
//! ```
//!
//! There is no lexer and no AST: evaluation recursively classifies trimmed
//! substrings and dispatches to priority-ordered evaluators. Splitting is
//! delimiter-aware (strings and brackets are respected), and the lenient
//! parts of the language, such as path misses and null comparisons, return
//! `null` or `false` rather than raising.

mod classify;
pub mod cli;
mod error;
mod eval;
mod functions;
mod interpreter;
mod options;
mod scope;
mod split;
mod value;

pub use error::EvalError;
pub use eval::{Env, Evaluator};
pub use functions::Function;
pub use interpreter::{Interpreter, TransformOutcome, ValidationOutcome};
pub use options::Options;
pub use scope::Scope;
pub use value::Value;

/// Transform `input` with `program` using a default interpreter.
///
/// Hosts doing repeated work should build one [`Interpreter`] and call
/// [`Interpreter::transform`] on it instead; the interpreter's tables are
/// read-only during evaluation and every call gets a fresh global scope.
///
/// # Examples
///
/// ```
/// use jslt_lite::{Value, transform};
///
/// let input = Value::from(serde_json::json!({"n": 5}));
/// let outcome = transform(&input, r#"if (.n > 3) "big" else "small""#);
/// assert_eq!(outcome.output, Some(Value::Str("big".into())));
/// ```
pub fn transform(input: &Value, program: &str) -> TransformOutcome {
    Interpreter::new().transform(input, program)
}

/// Check whether `program` is well-formed, with hints on failure.
///
/// # Examples
///
/// ```
/// use jslt_lite::validate;
///
/// assert!(validate(".a.b").valid);
///
/// let report = validate("foo(.x)");
/// assert!(!report.valid);
/// assert_eq!(report.error.as_deref(), Some("Unknown function: foo"));
/// ```
pub fn validate(program: &str) -> ValidationOutcome {
    Interpreter::new().validate(program)
}

#[cfg(test)]
mod tests;
