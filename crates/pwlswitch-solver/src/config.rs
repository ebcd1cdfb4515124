/// Tunable knobs for the case compiler. Mirrors the teacher's
/// `SolverConfig` shape: a small, `Default`-able struct threaded through
/// `solve` rather than a pile of free function parameters.
#[derive(Clone, Copy, Debug)]
pub struct CompilerConfig {
    /// Total number of disable-set configurations tried per case before
    /// giving up and dropping it as infeasible (spec.md §4.5, flagged as
    /// a heuristic in §9 Open Questions: not proven adequate for
    /// circuits with many inductors).
    pub max_disable_attempts: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            max_disable_attempts: 10,
        }
    }
}
