//! Edges, connectivity group identifiers and per-round proposal sets.

use std::{
    cmp::Ordering,
    fmt,
    sync::{Mutex, MutexGuard},
};

use crate::{
    error::{BoruvkaError, Result},
    matrix::Weight,
};

/// Identifier of a connectivity group.
///
/// Fresh identifiers are handed out in increasing order, one per proposal, and
/// are never reused within a run.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GroupId(u64);

impl GroupId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weighted connection between two vertices tagged with its group.
///
/// # Examples
/// ```
/// use boruvka_core::{Edge, GroupId};
///
/// let edge = Edge::new(3, 1, 7, GroupId::new(2));
/// assert_eq!(edge.endpoints(), (1, 3));
/// assert_eq!(edge.to_string(), "3-1 (weight 7, group 2)");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    start: usize,
    finish: usize,
    weight: Weight,
    group: GroupId,
}

impl Edge {
    /// Creates an edge from `start` to `finish`.
    #[must_use]
    pub const fn new(start: usize, finish: usize, weight: Weight, group: GroupId) -> Self {
        Self {
            start,
            finish,
            weight,
            group,
        }
    }

    /// Returns the proposing vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> usize { self.start }

    /// Returns the vertex the edge leads to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn finish(&self) -> usize { self.finish }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the connectivity group tag.
    #[must_use]
    #[rustfmt::skip]
    pub const fn group(&self) -> GroupId { self.group }

    /// Returns the endpoints as an unordered pair `(min, max)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        if self.start <= self.finish {
            (self.start, self.finish)
        } else {
            (self.finish, self.start)
        }
    }

    /// Returns a copy of the edge carrying `group`.
    #[must_use]
    pub const fn with_group(self, group: GroupId) -> Self {
        Self { group, ..self }
    }

    fn merge_order(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.finish.cmp(&other.finish))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} (weight {}, group {})",
            self.start, self.finish, self.weight, self.group
        )
    }
}

#[derive(Debug)]
struct Proposals {
    edges: Vec<Edge>,
    next_group: GroupId,
}

/// Lock-protected set of proposals gathered during one contraction round.
///
/// Workers append through [`EdgeSet::propose`] while holding the set's single
/// lock; each accepted proposal receives the next fresh [`GroupId`]. Once all
/// workers have finished, [`EdgeSet::sort_by_weight`] orders the proposals for
/// merging.
///
/// # Examples
/// ```
/// use boruvka_core::{EdgeSet, GroupId};
///
/// let set = EdgeSet::new(GroupId::new(10));
/// set.propose(0, 1, 5)?;
/// set.propose(2, 1, 3)?;
/// let mut set = set;
/// set.sort_by_weight()?;
/// let edges = set.edges()?;
/// assert_eq!(edges[0].weight(), 3);
/// assert_eq!(edges[0].group(), GroupId::new(11));
/// assert_eq!(set.next_group()?, GroupId::new(12));
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Debug)]
pub struct EdgeSet {
    inner: Mutex<Proposals>,
}

impl EdgeSet {
    /// Creates an empty set whose first proposal receives `first_group`.
    #[must_use]
    pub const fn new(first_group: GroupId) -> Self {
        Self {
            inner: Mutex::new(Proposals {
                edges: Vec::new(),
                next_group: first_group,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Proposals>> {
        self.inner.lock().map_err(|_| BoruvkaError::LockPoisoned {
            resource: "edge set",
        })
    }

    fn inner_mut(&mut self) -> Result<&mut Proposals> {
        self.inner.get_mut().map_err(|_| BoruvkaError::LockPoisoned {
            resource: "edge set",
        })
    }

    /// Appends a proposal and returns the edge with its fresh group.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::LockPoisoned`] if another worker panicked while
    /// holding the lock.
    pub fn propose(&self, start: usize, finish: usize, weight: Weight) -> Result<Edge> {
        let mut proposals = self.lock()?;
        let edge = Edge::new(start, finish, weight, proposals.next_group);
        proposals.next_group = proposals.next_group.successor();
        proposals.edges.push(edge);
        Ok(edge)
    }

    /// Sorts the proposals by ascending weight.
    ///
    /// Equal weights are ordered by `(start, finish)` so the merge order does
    /// not depend on which worker finished first.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::LockPoisoned`] if the lock is poisoned.
    pub fn sort_by_weight(&mut self) -> Result<()> {
        self.inner_mut()?.edges.sort_by(Edge::merge_order);
        Ok(())
    }

    /// Returns a snapshot of the proposals in their current order.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::LockPoisoned`] if the lock is poisoned.
    pub fn edges(&self) -> Result<Vec<Edge>> {
        Ok(self.lock()?.edges.clone())
    }

    /// Consumes the set and returns its proposals.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::LockPoisoned`] if the lock is poisoned.
    pub fn into_edges(self) -> Result<Vec<Edge>> {
        self.inner
            .into_inner()
            .map(|proposals| proposals.edges)
            .map_err(|_| BoruvkaError::LockPoisoned {
                resource: "edge set",
            })
    }

    /// Returns the number of proposals.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::LockPoisoned`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.edges.len())
    }

    /// Returns `true` when no vertex has proposed yet.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::LockPoisoned`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.edges.is_empty())
    }

    /// Returns the group id the next proposal would receive.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::LockPoisoned`] if the lock is poisoned.
    pub fn next_group(&self) -> Result<GroupId> {
        Ok(self.lock()?.next_group)
    }
}
