//! Property-based tests for the contraction driver.
//!
//! Checks every run against structural invariants (no duplicate pairs,
//! acyclicity, group consistency), per-round invariants (matrix consumption,
//! group counter advance), agreement with a sequential Kruskal oracle once a
//! run reaches its fixed point, and run-to-run determinism of the parallel
//! search.

mod equivalence;
mod helpers;
mod structural;
mod types;
