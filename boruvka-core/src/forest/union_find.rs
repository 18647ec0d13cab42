//! Disjoint-set union over forest vertices.
//!
//! Each root carries the canonical [`GroupId`] of its component. A vertex that
//! no accepted edge touches is a singleton without a label.

use crate::edge::GroupId;

#[derive(Clone, Debug)]
pub(super) struct ComponentSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    label: Vec<Option<GroupId>>,
    components: usize,
}

impl ComponentSet {
    pub(super) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            label: vec![None; n],
            components: n,
        }
    }

    #[rustfmt::skip]
    pub(super) fn components(&self) -> usize { self.components }

    pub(super) fn find(&mut self, mut node: usize) -> usize {
        let root = self.root(node);

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Walks to the root without compressing the path.
    pub(super) fn root(&self, mut node: usize) -> usize {
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    pub(super) fn label(&self, node: usize) -> Option<GroupId> {
        self.label.get(self.root(node)).copied().flatten()
    }

    /// Merges the components of `left` and `right` under `group`.
    ///
    /// Returns `false` without changes when both already share a root.
    pub(super) fn union(&mut self, left: usize, right: usize, group: GroupId) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.label[left] = Some(group);
        self.components = self.components.saturating_sub(1);
        true
    }
}
