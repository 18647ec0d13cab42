//! Shared helpers for contraction property tests.

use proptest::test_runner::TestCaseError;

use crate::{Boruvka, BoruvkaBuilder, Edge, ExecutionStrategy};

use super::types::MatrixFixture;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Reduces edges to `(start, finish, weight)` for comparisons that ignore
/// group labels.
pub(super) fn triples(edges: &[Edge]) -> Vec<(usize, usize, u32)> {
    edges
        .iter()
        .map(|edge| (edge.start(), edge.finish(), edge.weight()))
        .collect()
}

/// Builds a driver, mapping configuration failures to test failures.
pub(super) fn driver(
    max_rounds: usize,
    strategy: ExecutionStrategy,
) -> Result<Boruvka, TestCaseError> {
    BoruvkaBuilder::new()
        .with_max_rounds(max_rounds)
        .with_execution_strategy(strategy)
        .build()
        .map_err(|e| TestCaseError::fail(format!("builder rejected configuration: {e}")))
}

/// Formats fixture context for failure messages.
pub(super) fn describe(fixture: &MatrixFixture) -> String {
    format!(
        "shape={:?}, vertices={}",
        fixture.shape,
        fixture.vertex_count()
    )
}
