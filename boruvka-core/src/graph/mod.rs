//! Graph state shared across contraction rounds.
//!
//! [`Graph`] owns the adjacency matrix and the group counter. Each call to
//! [`Graph::load_min_edges`] runs one round: every vertex searches its row for
//! the cheapest remaining edge, the proposals are appended to a fresh
//! [`EdgeSet`], and the chosen `[start][finish]` entries are consumed once all
//! searches have finished.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    builder::{Backend, ExecutionStrategy},
    edge::{EdgeSet, GroupId},
    error::Result,
    matrix::{AdjacencyMatrix, Weight},
};

/// Adjacency matrix plus the group counter for one contraction run.
///
/// # Examples
/// ```
/// use boruvka_core::{ExecutionStrategy, Graph, GroupId};
///
/// let mut graph = Graph::from_rows(vec![vec![0, 2], vec![2, 0]])?;
/// let set = graph.load_min_edges(ExecutionStrategy::Sequential)?;
/// assert_eq!(set.len()?, 2);
/// assert_eq!(graph.next_group(), GroupId::new(2));
/// assert_eq!(graph.matrix().remaining_entries(), 0);
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    matrix: AdjacencyMatrix,
    next_group: GroupId,
}

impl Graph {
    /// Wraps a validated matrix; the first proposal will receive group `0`.
    #[must_use]
    pub fn new(matrix: AdjacencyMatrix) -> Self {
        Self {
            matrix,
            next_group: GroupId::default(),
        }
    }

    /// Validates `rows` and wraps them in a graph.
    ///
    /// # Errors
    /// Propagates the validation errors of [`AdjacencyMatrix::from_rows`].
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self> {
        AdjacencyMatrix::from_rows(rows).map(Self::new)
    }

    /// Returns the current (partially consumed) matrix.
    #[must_use]
    #[rustfmt::skip]
    pub fn matrix(&self) -> &AdjacencyMatrix { &self.matrix }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.matrix.vertex_count()
    }

    /// Returns the group id the next proposal will receive.
    #[must_use]
    #[rustfmt::skip]
    pub fn next_group(&self) -> GroupId { self.next_group }

    /// Runs one contraction round and returns its unsorted proposals.
    ///
    /// Vertices without a positive entry left in their row propose nothing.
    /// The group counter advances once per proposal.
    ///
    /// # Errors
    /// Returns [`crate::BoruvkaError::BackendUnavailable`] when `strategy`
    /// cannot run in this build and [`crate::BoruvkaError::LockPoisoned`]
    /// if a worker panicked while appending.
    #[instrument(
        name = "graph.load_min_edges",
        level = "debug",
        err,
        skip(self),
        fields(vertices = self.matrix.vertex_count(), first_group = %self.next_group),
    )]
    pub fn load_min_edges(&mut self, strategy: ExecutionStrategy) -> Result<EdgeSet> {
        let set = EdgeSet::new(self.next_group);

        match strategy.backend()? {
            #[cfg(feature = "parallel")]
            Backend::Parallel => self.propose_parallel(&set)?,
            Backend::Sequential => self.propose_sequential(&set)?,
        }

        for edge in set.edges()? {
            self.matrix.consume(edge.start(), edge.finish());
        }
        self.next_group = set.next_group()?;

        let proposals = set.len()?;
        debug!(
            proposals,
            next_group = %self.next_group,
            "round proposals collected"
        );
        Ok(set)
    }

    #[cfg(feature = "parallel")]
    fn propose_parallel(&self, set: &EdgeSet) -> Result<()> {
        (0..self.matrix.vertex_count())
            .into_par_iter()
            .try_for_each(|vertex| self.propose_vertex(vertex, set))
    }

    fn propose_sequential(&self, set: &EdgeSet) -> Result<()> {
        (0..self.matrix.vertex_count()).try_for_each(|vertex| self.propose_vertex(vertex, set))
    }

    fn propose_vertex(&self, vertex: usize, set: &EdgeSet) -> Result<()> {
        if let Some((finish, weight)) = self.matrix.min_edge(vertex) {
            set.propose(vertex, finish, weight)?;
        }
        Ok(())
    }
}

impl From<AdjacencyMatrix> for Graph {
    fn from(matrix: AdjacencyMatrix) -> Self {
        Self::new(matrix)
    }
}
