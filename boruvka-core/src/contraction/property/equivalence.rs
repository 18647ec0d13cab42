//! Property: fixed-point runs agree with a sequential Kruskal oracle.
//!
//! With a round bound equal to the vertex count, a run always ends spanning or
//! exhausted. At that point the forest must connect exactly the input's
//! components: same edge count and component count as the oracle, and a
//! total weight no smaller than the oracle's minimum.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{ExecutionStrategy, Termination};

use super::helpers::{describe, driver};
use super::oracle::sequential_kruskal;
use super::types::MatrixFixture;

/// Runs the oracle agreement property for the given fixture.
pub(super) fn run_oracle_agreement_property(fixture: &MatrixFixture) -> TestCaseResult {
    let oracle = sequential_kruskal(&fixture.rows);
    let outcome = driver(fixture.vertex_count(), ExecutionStrategy::Sequential)?
        .run(fixture.matrix())
        .map_err(|e| TestCaseError::fail(format!("run failed: {e} ({})", describe(fixture))))?;
    let forest = outcome.forest();

    if outcome.termination() == Termination::RoundLimit {
        return Err(TestCaseError::fail(format!(
            "fixed-point bound was hit ({})",
            describe(fixture)
        )));
    }
    if forest.len() != oracle.edge_count || forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "forest has {} edges / {} components, oracle {} / {} ({})",
            forest.len(),
            forest.component_count(),
            oracle.edge_count,
            oracle.component_count,
            describe(fixture),
        )));
    }
    if forest.total_weight() < oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "forest weight {} is below the minimum {} ({})",
            forest.total_weight(),
            oracle.total_weight,
            describe(fixture),
        )));
    }
    Ok(())
}
