//! Borůvka-style contraction driver.
//!
//! [`Boruvka::run`] repeats `load_min_edges -> sort -> merge` over one
//! [`Graph`], growing a single [`Forest`]. A run ends when the forest spans
//! the graph, when a round produces no proposals, or when the configured round
//! bound is reached, whichever comes first.

use std::num::NonZeroUsize;

use tracing::{info, info_span, instrument, warn};

use crate::{
    builder::ExecutionStrategy,
    error::Result,
    forest::{Forest, MergeSummary},
    graph::Graph,
    matrix::AdjacencyMatrix,
};

/// Reason a contraction run stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Termination {
    /// The forest became a single tree over every vertex.
    Spanning,
    /// No vertex had an edge left to propose.
    Exhausted,
    /// The configured round bound was reached first.
    RoundLimit,
}

/// Per-round counters reported by [`Boruvka::run`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoundReport {
    /// One-based round number.
    pub round: usize,
    /// Number of vertices that proposed an edge.
    pub proposals: usize,
    /// Admission counts for the round's proposals.
    pub merge: MergeSummary,
}

/// Result of a contraction run.
#[derive(Clone, Debug)]
pub struct ContractionOutcome {
    forest: Forest,
    rounds: Vec<RoundReport>,
    termination: Termination,
}

impl ContractionOutcome {
    /// Returns the accumulated forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest(&self) -> &Forest { &self.forest }

    /// Consumes the outcome and returns the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_forest(self) -> Forest { self.forest }

    /// Returns the reports of the rounds that produced proposals.
    #[must_use]
    #[rustfmt::skip]
    pub fn rounds(&self) -> &[RoundReport] { &self.rounds }

    /// Returns why the run stopped.
    #[must_use]
    #[rustfmt::skip]
    pub fn termination(&self) -> Termination { self.termination }
}

/// Entry point for running contraction rounds.
///
/// # Examples
/// ```
/// use boruvka_core::{AdjacencyMatrix, BoruvkaBuilder, Termination};
///
/// let matrix = AdjacencyMatrix::from_rows(vec![
///     vec![0, 1, 0, 4],
///     vec![1, 0, 2, 0],
///     vec![0, 2, 0, 3],
///     vec![4, 0, 3, 0],
/// ])?;
/// let outcome = BoruvkaBuilder::new().build()?.run(matrix)?;
/// assert_eq!(outcome.termination(), Termination::Spanning);
/// assert_eq!(outcome.forest().total_weight(), 6);
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Boruvka {
    max_rounds: NonZeroUsize,
    execution_strategy: ExecutionStrategy,
}

impl Boruvka {
    pub(crate) const fn new(max_rounds: NonZeroUsize, execution_strategy: ExecutionStrategy) -> Self {
        Self {
            max_rounds,
            execution_strategy,
        }
    }

    /// Returns the upper bound on contraction rounds.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_rounds(&self) -> NonZeroUsize { self.max_rounds }

    /// Returns the execution strategy used for minimum-edge searches.
    #[must_use]
    #[rustfmt::skip]
    pub fn execution_strategy(&self) -> ExecutionStrategy { self.execution_strategy }

    /// Runs contraction rounds over a fresh graph built from `matrix`.
    ///
    /// # Errors
    /// Returns [`crate::BoruvkaError::BackendUnavailable`] when the strategy
    /// cannot run in this build and [`crate::BoruvkaError::LockPoisoned`] if a
    /// worker panicked during a round.
    pub fn run(&self, matrix: AdjacencyMatrix) -> Result<ContractionOutcome> {
        let mut graph = Graph::new(matrix);
        self.run_graph(&mut graph)
    }

    /// Runs contraction rounds over an existing graph.
    ///
    /// The graph's matrix and group counter keep the state left by the run,
    /// so a later call continues from where this one stopped, into a new
    /// forest.
    ///
    /// # Errors
    /// See [`Boruvka::run`].
    #[instrument(
        name = "boruvka.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            max_rounds = self.max_rounds.get(),
            strategy = ?self.execution_strategy,
        ),
    )]
    pub fn run_graph(&self, graph: &mut Graph) -> Result<ContractionOutcome> {
        let mut forest = Forest::new(graph.vertex_count());
        let mut rounds = Vec::new();
        let mut termination = Termination::RoundLimit;

        for round in 1..=self.max_rounds.get() {
            if forest.is_spanning_tree() {
                termination = Termination::Spanning;
                break;
            }
            let Some(report) = self.run_round(graph, &mut forest, round)? else {
                termination = Termination::Exhausted;
                break;
            };
            rounds.push(report);
        }
        if termination == Termination::RoundLimit && forest.is_spanning_tree() {
            termination = Termination::Spanning;
        }

        if termination == Termination::RoundLimit {
            warn!(
                rounds = rounds.len(),
                components = forest.component_count(),
                "round limit reached before the forest spans the graph"
            );
        }
        info!(
            edges = forest.len(),
            components = forest.component_count(),
            total_weight = forest.total_weight(),
            rounds = rounds.len(),
            termination = ?termination,
            "contraction completed"
        );

        Ok(ContractionOutcome {
            forest,
            rounds,
            termination,
        })
    }

    fn run_round(
        &self,
        graph: &mut Graph,
        forest: &mut Forest,
        round: usize,
    ) -> Result<Option<RoundReport>> {
        let span = info_span!("boruvka.round", round);
        let _entered = span.enter();

        let mut proposals = graph.load_min_edges(self.execution_strategy)?;
        let proposal_count = proposals.len()?;
        if proposal_count == 0 {
            return Ok(None);
        }

        proposals.sort_by_weight()?;
        let merge = forest.add_edges(&proposals.into_edges()?);
        record_round(proposal_count, merge);

        info!(
            proposals = proposal_count,
            accepted = merge.accepted,
            duplicates = merge.duplicates,
            cycles = merge.cycles,
            "round merged"
        );
        Ok(Some(RoundReport {
            round,
            proposals: proposal_count,
            merge,
        }))
    }
}

#[cfg(feature = "metrics")]
fn record_round(proposals: usize, merge: MergeSummary) {
    metrics::counter!("boruvka_rounds_total").increment(1);
    metrics::counter!("boruvka_proposals_total").increment(as_u64(proposals));
    metrics::counter!("boruvka_edges_accepted_total").increment(as_u64(merge.accepted));
    metrics::counter!("boruvka_edges_rejected_total").increment(as_u64(merge.rejected()));
}

#[cfg(feature = "metrics")]
fn as_u64(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}

#[cfg(not(feature = "metrics"))]
fn record_round(_proposals: usize, _merge: MergeSummary) {}

#[cfg(test)]
mod property;
