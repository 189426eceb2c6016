//! Square integer distance matrix.

use serde::Serialize;

use crate::error::MatrixError;

/// An n×n table of non-negative integer metres.
///
/// `get(i, j)` is the distance from location `i` to location `j`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DistanceMatrix {
    rows: Vec<Vec<u64>>,
}

impl DistanceMatrix {
    /// Builds a matrix from raw rows, rejecting non-square input.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, MatrixError> {
        let expected = rows.len();
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(MatrixError::NotSquare {
                row,
                len: values.len(),
                expected,
            });
        }
        Ok(Self { rows })
    }

    /// Wraps rows already known to be square.
    pub(crate) fn from_square_rows(rows: Vec<Vec<u64>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        Self { rows }
    }

    /// Number of locations (rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance from `from` to `to`, or `None` when either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<u64> {
        self.rows.get(from).and_then(|row| row.get(to)).copied()
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Whether every `(i, j)` entry equals its `(j, i)` counterpart within `tolerance`.
    pub fn is_symmetric_within(&self, tolerance: u64) -> bool {
        self.rows.iter().enumerate().all(|(i, row)| {
            row.iter().enumerate().all(|(j, &value)| {
                self.get(j, i)
                    .is_some_and(|back| back.abs_diff(value) <= tolerance)
            })
        })
    }
}
