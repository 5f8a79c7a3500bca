use thiserror::Error;

/// Errors raised while evaluating a program.
///
/// These bubble up through the recursive evaluator; the driver converts them
/// into a failure envelope with the rendered message. Path resolution and the
/// comparison operators deliberately never raise: shape mismatches there
/// produce `null` and `false` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Empty expression")]
    EmptyExpression,
    /// A shape matcher fired but the detailed parse failed (malformed `if`,
    /// `for`, `let`, or object pair). The message carries the specifics.
    #[error("{0}")]
    Syntax(String),
    #[error("Invalid expression: {0}")]
    UnknownConstruct(String),
    #[error("Undefined variable: ${0}")]
    UndefinedVariable(String),
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
    #[error("Invalid argument: {0}")]
    BadArgument(String),
    #[error("For loop requires an array")]
    ForRequiresArray,
    #[error("Expression nesting exceeds the depth limit ({0})")]
    RecursionLimit(usize),
    #[error("Program size {size} exceeds the limit of {limit} bytes")]
    ProgramTooLarge { size: usize, limit: usize },
}
