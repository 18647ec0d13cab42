//! Benchmark parameter types.

use std::fmt;

use boruvka_core::ExecutionStrategy;

/// Parameters for one contraction benchmark run.
#[derive(Clone, Debug)]
pub struct ContractionBenchParams {
    /// Number of vertices in the matrix.
    pub vertex_count: usize,
    /// Backend used for the minimum-edge search.
    pub strategy: ExecutionStrategy,
}

impl fmt::Display for ContractionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self.strategy {
            ExecutionStrategy::Auto => "auto",
            ExecutionStrategy::Parallel => "parallel",
            ExecutionStrategy::Sequential => "sequential",
        };
        write!(f, "n={},{strategy}", self.vertex_count)
    }
}
