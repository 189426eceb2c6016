//! Closed single-vehicle tours.

use serde::Serialize;

use crate::error::SolveError;
use crate::matrix::DistanceMatrix;

/// A visiting order that starts and ends at the depot.
///
/// The last entry repeats the first to represent the return leg, so a tour
/// over `n` nodes has `n + 1` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    nodes: Vec<usize>,
}

impl Route {
    /// Decodes a successor assignment into a route.
    ///
    /// `next[i]` is the node visited after `i`; `None` marks the end of the
    /// path. Decoding starts at `start`, follows `next` until the end marker,
    /// then appends `start` again for the return leg.
    pub fn decode(next: &[Option<usize>], start: usize) -> Result<Self, SolveError> {
        let nodes = next.len();
        if start >= nodes {
            return Err(SolveError::StartOutOfRange { start, nodes });
        }

        let mut seen = vec![false; nodes];
        let mut order = Vec::with_capacity(nodes + 1);
        let mut current = Some(start);

        while let Some(node) = current {
            match seen.get_mut(node) {
                Some(flag) if !*flag => *flag = true,
                _ => {
                    return Err(SolveError::MalformedAssignment {
                        visited: order.len(),
                        nodes,
                    });
                }
            }
            order.push(node);
            current = next.get(node).copied().flatten();
        }

        if order.len() != nodes {
            return Err(SolveError::MalformedAssignment {
                visited: order.len(),
                nodes,
            });
        }

        order.push(start);
        Ok(Self { nodes: order })
    }

    /// Builds a closed tour from an open visiting order beginning at the depot.
    pub fn closed(order: &[usize]) -> Result<Self, SolveError> {
        let Some(&start) = order.first() else {
            return Err(SolveError::EmptyMatrix);
        };
        let mut next = vec![None; order.len()];
        for pair in order.windows(2) {
            if let Some(slot) = next.get_mut(pair[0]) {
                *slot = Some(pair[1]);
            }
        }
        Self::decode(&next, start)
    }

    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Number of entries including the repeated start.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consecutive `(from, to)` pairs in tour order.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Sum of leg distances taken from `matrix`.
    ///
    /// Legs outside the matrix contribute nothing.
    pub fn total_distance(&self, matrix: &DistanceMatrix) -> u64 {
        self.legs()
            .filter_map(|(from, to)| matrix.get(from, to))
            .sum()
    }

    /// Whether this is a Hamiltonian closed tour over `n` nodes.
    pub fn is_closed_tour(&self, n: usize) -> bool {
        let (Some(first), Some(last)) = (self.nodes.first(), self.nodes.last()) else {
            return false;
        };
        if first != last || self.nodes.len() != n + 1 {
            return false;
        }
        let mut seen = vec![false; n];
        self.nodes[..n].iter().all(|&node| match seen.get_mut(node) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        })
    }
}
