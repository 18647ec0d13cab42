//! Property: structural invariants of the accumulated forest.
//!
//! For any run, verifies:
//!
//! - **No duplicates**: no two forest edges share an unordered pair.
//! - **Acyclicity**: every acceptance-order prefix is acyclic.
//! - **Edge count**: at most `n - 1`, and exactly `n - c` for `c`
//!   reported components.
//! - **Provenance**: every forest edge exists in the input with the same
//!   weight.
//! - **Group consistency**: edges share a group exactly when they share a
//!   component.

use std::collections::{HashMap, HashSet};

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, ExecutionStrategy, Forest};

use super::helpers::{describe, driver, find_root};
use super::types::MatrixFixture;

/// Runs the structural invariant property with the default and the
/// fixed-point round bounds.
pub(super) fn run_structural_invariants_property(fixture: &MatrixFixture) -> TestCaseResult {
    for max_rounds in [crate::DEFAULT_MAX_ROUNDS, fixture.vertex_count()] {
        let outcome = driver(max_rounds, ExecutionStrategy::Sequential)?
            .run(fixture.matrix())
            .map_err(|e| TestCaseError::fail(format!("run failed: {e} ({})", describe(fixture))))?;
        validate_forest(fixture, outcome.forest())?;
    }
    Ok(())
}

fn validate_forest(fixture: &MatrixFixture, forest: &Forest) -> TestCaseResult {
    let edges = forest.edges();
    validate_no_duplicates(&edges)?;
    validate_acyclicity(fixture.vertex_count(), &edges)?;
    validate_edge_count(fixture, forest)?;
    validate_provenance(fixture, &edges)?;
    validate_groups(fixture.vertex_count(), &edges)?;
    Ok(())
}

fn validate_no_duplicates(edges: &[Edge]) -> TestCaseResult {
    let mut seen = HashSet::new();
    for (i, edge) in edges.iter().enumerate() {
        if !seen.insert(edge.endpoints()) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: duplicate pair {:?}",
                edge.endpoints()
            )));
        }
    }
    Ok(())
}

fn validate_acyclicity(node_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..node_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let ra = find_root(&mut parent, edge.start());
        let rb = find_root(&mut parent, edge.finish());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) closes a cycle",
                edge.start(),
                edge.finish(),
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}

fn validate_edge_count(fixture: &MatrixFixture, forest: &Forest) -> TestCaseResult {
    let n = fixture.vertex_count();
    let expected = n - forest.component_count();
    if forest.len() != expected || forest.len() > n.saturating_sub(1) {
        return Err(TestCaseError::fail(format!(
            "edge count {} with {} components ({})",
            forest.len(),
            forest.component_count(),
            describe(fixture),
        )));
    }
    Ok(())
}

fn validate_provenance(fixture: &MatrixFixture, edges: &[Edge]) -> TestCaseResult {
    for edge in edges {
        let original = fixture.rows[edge.start()][edge.finish()];
        if original == 0 || original != edge.weight() {
            return Err(TestCaseError::fail(format!(
                "edge {edge} does not match input weight {original} ({})",
                describe(fixture),
            )));
        }
    }
    Ok(())
}

fn validate_groups(node_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..node_count).collect();
    for edge in edges {
        let ra = find_root(&mut parent, edge.start());
        let rb = find_root(&mut parent, edge.finish());
        parent[rb] = ra;
    }

    let mut group_by_root = HashMap::new();
    let mut root_by_group = HashMap::new();
    for edge in edges {
        let root = find_root(&mut parent, edge.start());
        let group = edge.group();
        if *group_by_root.entry(root).or_insert(group) != group
            || *root_by_group.entry(group).or_insert(root) != root
        {
            return Err(TestCaseError::fail(format!(
                "edge {edge}: group does not match its component",
            )));
        }
    }
    Ok(())
}
