//! Shape predicates deciding which evaluator may handle an expression.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::split::find_top_level;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());
static FUNCTION_CALL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s*\(([^)]*)\)$").unwrap());

#[inline]
pub(crate) fn is_string_literal(expr: &str) -> bool {
    expr.len() >= 2
        && ((expr.starts_with('"') && expr.ends_with('"'))
            || (expr.starts_with('\'') && expr.ends_with('\'')))
}

#[inline]
pub(crate) fn is_number_literal(expr: &str) -> bool {
    NUMBER_RE.is_match(expr)
}

#[inline]
pub(crate) fn is_boolean_literal(expr: &str) -> bool {
    expr == "true" || expr == "false"
}

#[inline]
pub(crate) fn is_null_literal(expr: &str) -> bool {
    expr == "null"
}

#[inline]
pub(crate) fn is_object_ctor(expr: &str) -> bool {
    expr.len() >= 2 && expr.starts_with('{') && expr.ends_with('}')
}

#[inline]
pub(crate) fn is_array_ctor(expr: &str) -> bool {
    expr.len() >= 2 && expr.starts_with('[') && expr.ends_with(']')
}

#[inline]
pub(crate) fn is_variable_ref(expr: &str) -> bool {
    expr.starts_with('$')
}

#[inline]
pub(crate) fn is_let(expr: &str) -> bool {
    expr.starts_with("let ")
}

#[inline]
pub(crate) fn is_if(expr: &str) -> bool {
    expr.starts_with("if")
}

#[inline]
pub(crate) fn is_for(expr: &str) -> bool {
    expr.starts_with("for")
}

#[inline]
pub(crate) fn is_path(expr: &str) -> bool {
    expr.starts_with('.')
}

/// Recognize `name(args)` and hand back the name and the raw argument text.
/// The argument capture rejects `)`, so calls nested inside the argument
/// list are not recognized as a single call.
pub(crate) fn as_function_call(expr: &str) -> Option<(&str, &str)> {
    FUNCTION_CALL_RE.captures(expr).map(|caps| {
        let name = caps.get(1).map_or("", |m| m.as_str());
        let args = caps.get(2).map_or("", |m| m.as_str());
        (name, args)
    })
}

#[inline]
pub(crate) fn is_function_call(expr: &str) -> bool {
    as_function_call(expr).is_some()
}

/// True when any of `ops` occurs at depth zero outside string literals.
pub(crate) fn has_top_level_op(expr: &str, ops: &[&str]) -> bool {
    ops.iter().any(|op| find_top_level(expr, op).is_some())
}
