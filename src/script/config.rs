/// Resource limits for one script run.
///
/// No wall-clock limit: `Execute` and `MsgBox` block until the user responds,
/// and time spent in a modal does not count against the operation budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptConfig {
    /// Engine operations a run may perform.
    pub max_operations: u64,
    /// Depth of nested script function calls.
    pub max_call_levels: usize,
    /// Expression nesting depth at top level; function bodies get half.
    pub max_expr_depth: usize,
    /// Longest string a script may build, in bytes.
    pub max_string_size: usize,
    /// Largest array or object map a script may build.
    pub max_collection_size: usize,
    /// Variables in scope at once, the root object included.
    pub max_variables: usize,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            max_operations: 1_000_000,
            max_call_levels: 64,
            max_expr_depth: 64,
            max_string_size: 1_000_000,
            max_collection_size: 100_000,
            max_variables: 10_000,
        }
    }
}
