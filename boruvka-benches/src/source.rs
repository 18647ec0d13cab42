//! Seeded synthetic adjacency matrices.

use boruvka_core::{AdjacencyMatrix, Weight};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchSetupError;

/// Configuration for a synthetic symmetric matrix.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Probability that a vertex pair is joined by an edge.
    pub density: f64,
    /// Largest weight drawn; weights are uniform in `1..=max_weight`.
    pub max_weight: Weight,
    /// Seed for the random generator.
    pub seed: u64,
}

/// Generates a symmetric matrix with a zero diagonal.
///
/// A Hamiltonian path `0 - 1 - ... - n-1` is always present so the graph is
/// connected regardless of `density`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when the vertex count or maximum
/// weight is zero.
///
/// # Examples
/// ```
/// use boruvka_benches::source::{SyntheticConfig, generate};
///
/// let matrix = generate(&SyntheticConfig {
///     vertex_count: 8,
///     density: 0.5,
///     max_weight: 10,
///     seed: 7,
/// })?;
/// assert_eq!(matrix.vertex_count(), 8);
/// # Ok::<(), boruvka_benches::error::BenchSetupError>(())
/// ```
pub fn generate(config: &SyntheticConfig) -> Result<AdjacencyMatrix, BenchSetupError> {
    let n = config.vertex_count;
    if n == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    if config.max_weight == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "max_weight",
        });
    }
    let density = config.density.clamp(0.0, 1.0);
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut rows = vec![vec![0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            if j == i + 1 || rng.gen_bool(density) {
                let weight = rng.gen_range(1..=config.max_weight);
                rows[i][j] = weight;
                rows[j][i] = weight;
            }
        }
    }
    Ok(AdjacencyMatrix::from_rows(rows)?)
}
