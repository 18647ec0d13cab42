//! Spanning forest accumulated across contraction rounds.
//!
//! The forest admits each candidate edge in two stages: an edge is rejected
//! when an accepted edge already joins the same unordered endpoint pair, and
//! then when both endpoints already sit in one component. Accepting an edge
//! merges its endpoint components; the edge's own group id becomes the
//! canonical group of the merged component.

mod union_find;

use std::{collections::HashSet, fmt};

use tracing::debug;

use crate::edge::{Edge, GroupId};

use self::union_find::ComponentSet;

/// Outcome of offering one candidate edge to a [`Forest`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Admission {
    /// The edge joined two components and is now part of the forest.
    Accepted,
    /// An accepted edge already connects the same endpoint pair.
    Duplicate,
    /// Both endpoints already belong to the same component.
    Cycle,
}

/// Counts of admission outcomes for one batch of candidates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MergeSummary {
    /// Edges added to the forest.
    pub accepted: usize,
    /// Edges rejected as duplicates of an accepted edge.
    pub duplicates: usize,
    /// Edges rejected because they would close a cycle.
    pub cycles: usize,
}

impl MergeSummary {
    /// Returns the number of rejected candidates.
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.duplicates.saturating_add(self.cycles)
    }

    fn record(&mut self, admission: Admission) {
        let slot = match admission {
            Admission::Accepted => &mut self.accepted,
            Admission::Duplicate => &mut self.duplicates,
            Admission::Cycle => &mut self.cycles,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Minimum spanning forest under construction.
///
/// # Examples
/// ```
/// use boruvka_core::{Admission, Edge, Forest, GroupId};
///
/// let mut forest = Forest::new(3);
/// assert_eq!(forest.admit(Edge::new(0, 1, 1, GroupId::new(0))), Admission::Accepted);
/// assert_eq!(forest.admit(Edge::new(1, 0, 1, GroupId::new(1))), Admission::Duplicate);
/// assert_eq!(forest.admit(Edge::new(2, 1, 2, GroupId::new(2))), Admission::Accepted);
/// assert_eq!(forest.admit(Edge::new(0, 2, 3, GroupId::new(3))), Admission::Cycle);
/// assert!(forest.is_spanning_tree());
/// assert_eq!(forest.total_weight(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Forest {
    edges: Vec<Edge>,
    pairs: HashSet<(usize, usize)>,
    components: ComponentSet,
    vertex_count: usize,
}

impl Forest {
    /// Creates an empty forest over `vertex_count` vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
            pairs: HashSet::new(),
            components: ComponentSet::new(vertex_count),
            vertex_count,
        }
    }

    /// Offers `edge` to the forest and reports what happened to it.
    ///
    /// Edges with an endpoint outside the forest's vertex range, and
    /// self-loops, are treated as cycles and never accepted.
    pub fn admit(&mut self, edge: Edge) -> Admission {
        let (low, high) = edge.endpoints();
        if self.pairs.contains(&(low, high)) {
            debug!(start = edge.start(), finish = edge.finish(), "duplicate edge rejected");
            return Admission::Duplicate;
        }
        if high >= self.vertex_count || !self.components.union(low, high, edge.group()) {
            debug!(start = edge.start(), finish = edge.finish(), "cycle-closing edge rejected");
            return Admission::Cycle;
        }

        self.pairs.insert((low, high));
        self.edges.push(edge);
        Admission::Accepted
    }

    /// Offers every edge of `candidates` in order.
    pub fn add_edges<'a>(&mut self, candidates: impl IntoIterator<Item = &'a Edge>) -> MergeSummary {
        let mut summary = MergeSummary::default();
        for edge in candidates {
            summary.record(self.admit(*edge));
        }
        summary
    }

    /// Returns the accepted edges in acceptance order, each tagged with the
    /// current group of its component.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|edge| match self.group_of(edge.start()) {
                Some(group) => edge.with_group(group),
                None => *edge,
            })
            .collect()
    }

    /// Returns the canonical group of `vertex`'s component, or `None` when
    /// no accepted edge touches it.
    #[must_use]
    pub fn group_of(&self, vertex: usize) -> Option<GroupId> {
        if vertex >= self.vertex_count {
            return None;
        }
        self.components.label(vertex)
    }

    /// Returns the number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when no edge has been accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components, counting isolated
    /// vertices.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.components()
    }

    /// Returns `true` when the forest is a single tree over all vertices.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count() == 1
    }

    /// Returns the sum of accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges
            .iter()
            .map(|edge| u64::from(edge.weight()))
            .sum()
    }
}

impl fmt::Display for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "forest: {} edges, {} components, total weight {}",
            self.len(),
            self.component_count(),
            self.total_weight()
        )?;
        for edge in self.edges() {
            writeln!(f, "  {edge}")?;
        }
        Ok(())
    }
}
