//! Type definitions for contraction property-based tests.

use test_strategy::Arbitrary;

use crate::AdjacencyMatrix;

/// Shape of the generated adjacency matrix.
///
/// Each shape stresses a different part of the driver: unique weights give a
/// unique MST, identical weights stress tie-breaking, and disconnected graphs
/// must never produce a cross-component edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Every edge carries a distinct weight.
    Unique,
    /// Weights drawn from a tiny range so most edges tie.
    ManyIdentical,
    /// A random spanning tree plus a few extra edges.
    Sparse,
    /// Nearly complete graph.
    Dense,
    /// Several blocks with no edges between them.
    Disconnected,
}

/// Fixture for contraction property tests.
#[derive(Clone, Debug)]
pub(super) struct MatrixFixture {
    /// Row-major symmetric weights with a zero diagonal.
    pub rows: Vec<Vec<u32>>,
    /// Shape used during generation.
    pub shape: GraphShape,
}

impl MatrixFixture {
    pub(super) fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    pub(super) fn matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(self.rows.clone())
            .expect("generated fixtures must be valid matrices")
    }
}

/// Configuration for the determinism property.
pub(super) struct ConcurrencyConfig {
    /// Number of times to repeat the run per input.
    pub repetitions: usize,
}

impl ConcurrencyConfig {
    /// Loads the configuration from `BORUVKA_PBT_CONCURRENCY_REPS`
    /// (default: 5).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("BORUVKA_PBT_CONCURRENCY_REPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self { repetitions }
    }
}
