//! Dense adjacency matrices for contraction rounds.
//!
//! A weight of `0` marks either an absent edge or an edge that a previous
//! round has already consumed from that row. Consumption is one-directional:
//! selecting `i -> j` clears `[i][j]` and leaves `[j][i]` intact, so `j` may
//! still propose the reverse edge in a later round.

use crate::error::{BoruvkaError, Result};

/// Edge weight stored in an [`AdjacencyMatrix`].
pub type Weight = u32;

/// Square matrix of non-negative edge weights.
///
/// # Examples
/// ```
/// use boruvka_core::AdjacencyMatrix;
///
/// let matrix = AdjacencyMatrix::from_rows(vec![
///     vec![0, 4, 1],
///     vec![4, 0, 2],
///     vec![1, 2, 0],
/// ])?;
/// assert_eq!(matrix.vertex_count(), 3);
/// assert_eq!(matrix.weight(0, 1), Some(4));
/// assert_eq!(matrix.min_edge(0), Some((2, 1)));
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    /// Builds a matrix from row vectors.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::EmptyGraph`] when no rows are given,
    /// [`BoruvkaError::NonSquareMatrix`] when a row length differs from the row
    /// count, [`BoruvkaError::SelfLoop`] for a non-zero diagonal entry, and
    /// [`BoruvkaError::AsymmetricWeight`] when `[i][j] != [j][i]`.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let expected = rows.len();
        if expected == 0 {
            return Err(BoruvkaError::EmptyGraph);
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(BoruvkaError::NonSquareMatrix {
                    row,
                    len: values.len(),
                    expected,
                });
            }
        }

        let matrix = Self { rows };
        matrix.validate_entries()?;
        Ok(matrix)
    }

    fn validate_entries(&self) -> Result<()> {
        for (row, values) in self.rows.iter().enumerate() {
            for (column, &forward) in values.iter().enumerate() {
                if row == column {
                    if forward != 0 {
                        return Err(BoruvkaError::SelfLoop {
                            vertex: row,
                            weight: forward,
                        });
                    }
                    continue;
                }
                let backward = self.weight(column, row).unwrap_or_default();
                if forward != backward {
                    return Err(BoruvkaError::AsymmetricWeight {
                        row,
                        column,
                        forward,
                        backward,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the number of vertices (rows).
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.rows.len() }

    /// Returns the weights of `vertex`'s row, or `None` when out of range.
    #[must_use]
    pub fn row(&self, vertex: usize) -> Option<&[Weight]> {
        self.rows.get(vertex).map(Vec::as_slice)
    }

    /// Returns the weight stored at `[start][finish]`.
    #[must_use]
    pub fn weight(&self, start: usize, finish: usize) -> Option<Weight> {
        self.rows.get(start)?.get(finish).copied()
    }

    /// Returns the cheapest remaining edge leaving `vertex` as
    /// `(finish, weight)`.
    ///
    /// Ties resolve to the lowest column. Returns `None` when the row holds
    /// no positive weight, including when `vertex` is out of range.
    #[must_use]
    pub fn min_edge(&self, vertex: usize) -> Option<(usize, Weight)> {
        self.row(vertex)?
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight > 0)
            .min_by_key(|&(column, &weight)| (weight, column))
            .map(|(column, &weight)| (column, weight))
    }

    /// Clears `[start][finish]` so the edge cannot be proposed from `start`
    /// again. The reverse entry is left untouched.
    ///
    /// Returns the weight that was cleared, or `None` for out-of-range
    /// indices.
    pub fn consume(&mut self, start: usize, finish: usize) -> Option<Weight> {
        let slot = self.rows.get_mut(start)?.get_mut(finish)?;
        Some(std::mem::take(slot))
    }

    /// Counts the positive entries that remain in the matrix.
    #[must_use]
    pub fn remaining_entries(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&weight| weight > 0).count())
            .sum()
    }

    /// Iterates over the undirected edges of the matrix as
    /// `(low, high, weight)` using the upper triangle.
    pub fn undirected_edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .skip(row.saturating_add(1))
                .filter(|&(_, &weight)| weight > 0)
                .map(move |(column, &weight)| (row, column, weight))
        })
    }
}

impl TryFrom<Vec<Vec<Weight>>> for AdjacencyMatrix {
    type Error = BoruvkaError;

    fn try_from(rows: Vec<Vec<Weight>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}
