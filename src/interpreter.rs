use std::time::{Duration, Instant};

use indexmap::IndexMap;
use log::debug;
use memchr::{memchr, memmem};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::EvalError;
use crate::eval::{Env, Evaluator, builtin_evaluators};
use crate::functions::{Function, builtin_functions};
use crate::options::Options;
use crate::scope::Scope;
use crate::value::Value;

static LET_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^let\s+(\w+)\s*=\s*(.+)$").unwrap());

/// Result envelope of [`Interpreter::transform`]. Unset fields are omitted
/// from serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock evaluation time, rounded to three decimals.
    pub execution_time_ms: f64,
}

/// Result envelope of [`Interpreter::validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub suggestions: Vec<String>,
}

/// The interpreter: a function registry, a priority-sorted evaluator table,
/// and evaluation limits.
///
/// Both tables are populated at construction (plus any explicit
/// registrations) and read-only during evaluation, so one interpreter can
/// serve many sequential calls; every call starts from a fresh global scope.
pub struct Interpreter {
    functions: IndexMap<String, Box<dyn Function>>,
    evaluators: Vec<Box<dyn Evaluator>>,
    options: Options,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        let mut interp = Self {
            functions: IndexMap::new(),
            evaluators: Vec::new(),
            options,
        };
        for function in builtin_functions() {
            interp.register_function(function);
        }
        for evaluator in builtin_evaluators() {
            interp.register_evaluator(evaluator);
        }
        interp
    }

    /// Register a function under its own name, replacing any previous
    /// registration. Registration order is preserved for listings.
    pub fn register_function(&mut self, function: Box<dyn Function>) {
        self.functions.insert(function.name().to_string(), function);
    }

    /// Add an evaluator and re-sort the dispatch table, highest priority
    /// first. The sort is stable, so earlier registrations win ties.
    pub fn register_evaluator(&mut self, evaluator: Box<dyn Evaluator>) {
        self.evaluators.push(evaluator);
        self.evaluators
            .sort_by_key(|e| std::cmp::Reverse(e.priority()));
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Registered functions in registration order.
    pub fn functions(&self) -> impl Iterator<Item = &dyn Function> {
        self.functions.values().map(|f| f.as_ref())
    }

    pub(crate) fn function(&self, name: &str) -> Option<&dyn Function> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    pub(crate) fn evaluators(&self) -> &[Box<dyn Evaluator>] {
        &self.evaluators
    }

    /// Evaluate `program` against `input` and report the outcome together
    /// with the elapsed time. Errors are captured in the envelope; this
    /// never panics on user input.
    pub fn transform(&self, input: &Value, program: &str) -> TransformOutcome {
        let started = Instant::now();
        let result = self.run(input, program);
        let execution_time_ms = round_millis(started.elapsed());
        match result {
            Ok(output) => {
                debug!("transform finished in {execution_time_ms} ms");
                TransformOutcome {
                    success: true,
                    output: Some(output),
                    error: None,
                    execution_time_ms,
                }
            }
            Err(err) => {
                debug!("transform failed after {execution_time_ms} ms: {err}");
                TransformOutcome {
                    success: false,
                    output: None,
                    error: Some(err.to_string()),
                    execution_time_ms,
                }
            }
        }
    }

    /// Check well-formedness by evaluating `program` against a fixed probe
    /// document; the output is discarded. Failures come back with hints
    /// keyed off the error message.
    pub fn validate(&self, program: &str) -> ValidationOutcome {
        let outcome = self.transform(&probe_document(), program);
        match outcome.error {
            None => ValidationOutcome {
                valid: true,
                error: None,
                suggestions: Vec::new(),
            },
            Some(error) => {
                let suggestions = self.suggestions_for(&error);
                ValidationOutcome {
                    valid: false,
                    error: Some(error),
                    suggestions,
                }
            }
        }
    }

    fn run(&self, input: &Value, program: &str) -> Result<Value, EvalError> {
        if program.len() > self.options.max_program_bytes {
            return Err(EvalError::ProgramTooLarge {
                size: program.len(),
                limit: self.options.max_program_bytes,
            });
        }
        let program = program.trim();
        // A fresh Env per call: empty global scope, depth counter at zero.
        let env = Env::new(self);
        let scope = Scope::new();
        if is_multiline_let(program) {
            self.run_multiline(program, input, &env, scope)
        } else {
            env.eval(program, input, &scope)
        }
    }

    /// Multi-line programs chain their `let` lines into one scope, then
    /// evaluate the remaining lines as the body. A program that is only
    /// bindings yields null.
    fn run_multiline(
        &self,
        program: &str,
        input: &Value,
        env: &Env,
        mut scope: Scope,
    ) -> Result<Value, EvalError> {
        let mut body_lines = Vec::new();
        for line in program.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with("let ") {
                let caps = LET_LINE_RE
                    .captures(line)
                    .ok_or_else(|| EvalError::Syntax(format!("Invalid let binding: {line}")))?;
                let value = env.eval(&caps[2], input, &scope)?;
                scope = scope.bind(&caps[1], value);
            } else {
                body_lines.push(line);
            }
        }
        if body_lines.is_empty() {
            return Ok(Value::Null);
        }
        env.eval(&body_lines.join("\n"), input, &scope)
    }

    fn suggestions_for(&self, error: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        if error.contains("Unknown function") {
            let names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
            suggestions.push(format!("Available functions: {}", names.join(", ")));
        }
        if error.contains("Invalid expression") {
            suggestions.extend(
                [
                    "Use .field to access object properties",
                    "Use .array[0] to access array elements",
                    "Use {} for object construction",
                    "Use [] for array construction",
                ]
                .map(String::from),
            );
        }
        suggestions
    }
}

/// Multi-line preprocessing only applies when a program has both a `let `
/// and a newline; single-line `let ... in ...` stays on the normal path.
fn is_multiline_let(program: &str) -> bool {
    memchr(b'\n', program.as_bytes()).is_some()
        && memmem::find(program.as_bytes(), b"let ").is_some()
}

fn probe_document() -> Value {
    Value::from(serde_json::json!({
        "test": "value",
        "array": [1, 2, 3],
        "name": "John Doe",
        "age": 25,
        "city": "New York",
        "skills": ["JavaScript", "Python", "Java"]
    }))
}

fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1_000_000.0).round() / 1000.0
}
