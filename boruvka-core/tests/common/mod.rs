//! Shared matrices for integration tests.
#![allow(dead_code, reason = "each test binary uses a different subset")]

use boruvka_core::{AdjacencyMatrix, Weight};

/// Builds a validated matrix, panicking on malformed fixtures.
pub fn matrix(rows: &[&[Weight]]) -> AdjacencyMatrix {
    AdjacencyMatrix::from_rows(rows.iter().map(|row| row.to_vec()).collect())
        .expect("fixture matrix must be valid")
}

/// Nine-vertex weighted graph whose minimum spanning tree weighs 23.
pub fn nine_vertex() -> AdjacencyMatrix {
    matrix(&[
        &[0, 5, 2, 0, 0, 0, 0, 0, 0],
        &[5, 0, 2, 4, 7, 0, 0, 0, 0],
        &[2, 2, 0, 3, 0, 0, 9, 0, 0],
        &[0, 4, 3, 0, 2, 0, 6, 0, 0],
        &[0, 7, 0, 2, 0, 8, 5, 7, 0],
        &[0, 0, 0, 0, 8, 0, 0, 3, 4],
        &[0, 0, 9, 6, 5, 0, 0, 2, 0],
        &[0, 0, 0, 0, 7, 3, 2, 0, 0],
        &[0, 0, 0, 0, 0, 4, 0, 0, 0],
    ])
}

/// Four vertices on a cycle with weights 1, 2, 3 and 4.
pub fn four_cycle() -> AdjacencyMatrix {
    matrix(&[&[0, 1, 0, 4], &[1, 0, 2, 0], &[0, 2, 0, 3], &[4, 0, 3, 0]])
}

/// Two disjoint triangles `{0, 1, 2}` and `{3, 4, 5}`.
pub fn two_triangles() -> AdjacencyMatrix {
    matrix(&[
        &[0, 1, 3, 0, 0, 0],
        &[1, 0, 2, 0, 0, 0],
        &[3, 2, 0, 0, 0, 0],
        &[0, 0, 0, 0, 1, 3],
        &[0, 0, 0, 1, 0, 2],
        &[0, 0, 0, 3, 2, 0],
    ])
}

pub fn six_vertex_light() -> AdjacencyMatrix {
    matrix(&[
        &[0, 4, 0, 3, 0, 5],
        &[4, 0, 3, 4, 0, 0],
        &[0, 3, 0, 2, 0, 0],
        &[3, 4, 2, 0, 3, 0],
        &[0, 0, 0, 3, 0, 1],
        &[5, 0, 0, 0, 1, 0],
    ])
}

pub fn six_vertex_heavy() -> AdjacencyMatrix {
    matrix(&[
        &[0, 3, 5, 0, 0, 0],
        &[3, 0, 8, 0, 12, 4],
        &[5, 8, 0, 10, 9, 0],
        &[0, 0, 10, 0, 7, 0],
        &[0, 12, 9, 7, 0, 15],
        &[0, 4, 0, 0, 15, 0],
    ])
}

pub fn five_vertex_wide() -> AdjacencyMatrix {
    matrix(&[
        &[0, 15, 1, 9, 0],
        &[15, 0, 18, 0, 6],
        &[1, 18, 0, 4, 11],
        &[9, 0, 4, 0, 23],
        &[0, 6, 11, 23, 0],
    ])
}

pub fn five_vertex_narrow() -> AdjacencyMatrix {
    matrix(&[
        &[0, 8, 5, 0, 0],
        &[8, 0, 9, 11, 0],
        &[5, 9, 0, 15, 10],
        &[0, 11, 15, 0, 7],
        &[0, 0, 10, 7, 0],
    ])
}
