/// Configuration for the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Split the search across rayon workers by first number
    pub parallel: bool,
    /// Size of a dedicated worker pool; `None` uses the global rayon pool
    pub threads: Option<usize>,
    /// Skip prefixes reaching an already seen (used positions, running value) state
    pub memoize: bool,
}

impl SolverConfig {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            memoize: true,
        }
    }
}
