//! Builtin functions and the registration trait.

use crate::error::EvalError;
use crate::value::Value;

/// A callable registered with the interpreter.
///
/// Builtins and host-supplied functions implement the same trait. Arguments
/// arrive already evaluated; implementations validate arity and types
/// themselves and report failures as [`EvalError::BadArgument`].
pub trait Function: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn call(&self, args: &[Value]) -> Result<Value, EvalError>;
}

fn single_arg<'a>(name: &str, args: &'a [Value]) -> Result<&'a Value, EvalError> {
    match args {
        [v] => Ok(v),
        _ => Err(EvalError::BadArgument(format!(
            "{}() expects exactly one argument, got {}",
            name,
            args.len()
        ))),
    }
}

/// `size(x)`: element count of arrays and objects, character count of
/// strings, 0 for everything else.
pub(crate) struct SizeFn;

impl Function for SizeFn {
    fn name(&self) -> &str {
        "size"
    }

    fn description(&self) -> &str {
        "Returns the size of an array, object, or string"
    }

    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        let n = match single_arg("size", args)? {
            Value::Str(s) => s.chars().count() as i64,
            Value::Array(xs) => xs.len() as i64,
            Value::Object(kv) => kv.len() as i64,
            _ => 0,
        };
        Ok(Value::Int(n))
    }
}

pub(crate) struct StringFn;

impl Function for StringFn {
    fn name(&self) -> &str {
        "string"
    }

    fn description(&self) -> &str {
        "Converts a value to a string"
    }

    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::Str(single_arg("string", args)?.render()))
    }
}

pub(crate) struct NumberFn;

impl Function for NumberFn {
    fn name(&self) -> &str {
        "number"
    }

    fn description(&self) -> &str {
        "Converts a value to a number"
    }

    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        let v = single_arg("number", args)?;
        Ok(match v {
            Value::Int(_) | Value::Double(_) => v.clone(),
            Value::Str(s) => {
                // All-digit strings become integers, anything else goes
                // through a double parse, and unparseable input is 0.
                if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                    s.parse::<i64>()
                        .map(Value::Int)
                        .unwrap_or_else(|_| parse_double_or_zero(s))
                } else {
                    parse_double_or_zero(s)
                }
            }
            _ => Value::Int(0),
        })
    }
}

fn parse_double_or_zero(s: &str) -> Value {
    s.parse::<f64>().map(Value::Double).unwrap_or(Value::Int(0))
}

pub(crate) struct BooleanFn;

impl Function for BooleanFn {
    fn name(&self) -> &str {
        "boolean"
    }

    fn description(&self) -> &str {
        "Converts a value to a boolean"
    }

    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        let b = match single_arg("boolean", args)? {
            Value::Bool(b) => *b,
            Value::Str(s) => matches!(s.to_lowercase().as_str(), "true" | "1" | "yes" | "on"),
            Value::Int(i) => *i != 0,
            Value::Double(d) => *d != 0.0,
            Value::Null => false,
            _ => true,
        };
        Ok(Value::Bool(b))
    }
}

pub(crate) struct RoundFn;

impl Function for RoundFn {
    fn name(&self) -> &str {
        "round"
    }

    fn description(&self) -> &str {
        "Rounds a number to the nearest integer, halves away from zero"
    }

    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        let d = match single_arg("round", args)? {
            Value::Int(i) => return Ok(Value::Int(*i)),
            Value::Double(d) => *d,
            Value::Str(s) => s.trim().parse::<f64>().map_err(|_| {
                EvalError::BadArgument(format!("round() expects a number, got {s:?}"))
            })?,
            other => {
                return Err(EvalError::BadArgument(format!(
                    "round() expects a number, got {}",
                    other.type_name()
                )));
            }
        };
        Ok(Value::Int(d.round() as i64))
    }
}

/// The functions every interpreter starts with, in registration order.
pub(crate) fn builtin_functions() -> Vec<Box<dyn Function>> {
    vec![
        Box::new(SizeFn),
        Box::new(StringFn),
        Box::new(NumberFn),
        Box::new(BooleanFn),
        Box::new(RoundFn),
    ]
}
