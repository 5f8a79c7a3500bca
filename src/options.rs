/// Evaluation limits.
///
/// Programs are untrusted input, so both their size and their nesting depth
/// are bounded. Hitting a bound surfaces as a regular evaluation error, never
/// a panic or process abort.
#[derive(Clone, Debug)]
pub struct Options {
    /// Maximum recursive evaluation depth. Each subexpression consumes one
    /// level, so this effectively bounds program nesting.
    pub max_depth: usize,
    /// Maximum program size in bytes accepted by `transform`/`validate`.
    pub max_program_bytes: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_program_bytes: 64 * 1024,
        }
    }
}
