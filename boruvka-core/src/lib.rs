//! Borůvka-style contraction for minimum spanning trees over dense adjacency
//! matrices.
//!
//! Each round every vertex proposes its cheapest remaining edge; proposals are
//! sorted by weight and merged into a growing [`Forest`] that rejects
//! duplicate and cycle-closing edges. [`BoruvkaBuilder`] configures how many
//! rounds run and whether the per-vertex searches run in parallel.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled each round emits:
//!
//! - `boruvka_rounds_total` (counter)
//! - `boruvka_proposals_total` (counter)
//! - `boruvka_edges_accepted_total` (counter)
//! - `boruvka_edges_rejected_total` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod contraction;
mod edge;
mod error;
mod forest;
mod graph;
mod matrix;

pub use crate::{
    builder::{BoruvkaBuilder, DEFAULT_MAX_ROUNDS, ExecutionStrategy},
    contraction::{Boruvka, ContractionOutcome, RoundReport, Termination},
    edge::{Edge, EdgeSet, GroupId},
    error::{BoruvkaError, BoruvkaErrorCode, Result},
    forest::{Admission, Forest, MergeSummary},
    graph::Graph,
    matrix::{AdjacencyMatrix, Weight},
};
