//! Single-vehicle tour solver (path cheapest arc + local search).

use crate::error::SolveError;
use crate::matrix::DistanceMatrix;
use crate::route::Route;
use crate::traits::RouteSolver;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Maximum rounds of local search improvement. Zero keeps the
    /// constructed tour as-is.
    pub local_search_iterations: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            local_search_iterations: 100,
        }
    }
}

/// Closed-tour solver seeded with the path-cheapest-arc heuristic.
///
/// Starting at the depot, the path is extended to the unvisited node with
/// the cheapest arc from its current end (ties go to the lowest index), then
/// refined with 2-opt and relocate moves until no move lowers the closed
/// tour cost. The result is deterministic for a given matrix.
#[derive(Debug, Clone, Default)]
pub struct CheapestArcSolver {
    options: SolveOptions,
}

impl CheapestArcSolver {
    pub fn new(options: SolveOptions) -> Self {
        Self { options }
    }
}

impl RouteSolver for CheapestArcSolver {
    fn solve(&self, matrix: &DistanceMatrix, start: usize) -> Result<Route, SolveError> {
        let nodes = matrix.len();
        if nodes == 0 {
            return Err(SolveError::EmptyMatrix);
        }
        if start >= nodes {
            return Err(SolveError::StartOutOfRange { start, nodes });
        }

        let mut order = path_cheapest_arc(matrix, start);
        let initial_cost = tour_cost(matrix, &order);

        // Local search improvement phase
        local_search(&mut order, matrix, &self.options);

        tracing::debug!(
            nodes,
            initial_cost,
            final_cost = tour_cost(matrix, &order),
            "solved tour"
        );

        Route::decode(&successors(&order, nodes), start)
    }
}

fn arc(matrix: &DistanceMatrix, from: usize, to: usize) -> u64 {
    matrix.get(from, to).unwrap_or(u64::MAX)
}

/// Cost of the closed tour described by an open `order` (return leg included).
fn tour_cost(matrix: &DistanceMatrix, order: &[usize]) -> u64 {
    let path = order
        .windows(2)
        .fold(0u64, |acc, pair| acc.saturating_add(arc(matrix, pair[0], pair[1])));
    match (order.last(), order.first()) {
        (Some(&last), Some(&first)) if order.len() > 1 => {
            path.saturating_add(arc(matrix, last, first))
        }
        _ => path,
    }
}

fn path_cheapest_arc(matrix: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = matrix.len();
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;

    while let Some(next) = (0..n)
        .filter(|&node| !visited[node])
        .min_by_key(|&node| (arc(matrix, current, node), node))
    {
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}

/// Successor table for an open order; the last node points at the end marker.
fn successors(order: &[usize], nodes: usize) -> Vec<Option<usize>> {
    let mut next = vec![None; nodes];
    for pair in order.windows(2) {
        next[pair[0]] = Some(pair[1]);
    }
    next
}

// ============================================================================
// Local Search Operators
// ============================================================================

/// 2-opt: Reverse a segment of the tour (depot stays first).
/// Returns true if an improvement was made.
fn two_opt_improve(order: &mut [usize], matrix: &DistanceMatrix) -> bool {
    let n = order.len();
    if n < 3 {
        return false;
    }

    let current_cost = tour_cost(matrix, order);

    for i in 1..n - 1 {
        for j in i + 1..n {
            let mut candidate = order.to_vec();
            candidate[i..=j].reverse();

            if tour_cost(matrix, &candidate) < current_cost {
                order[i..=j].reverse();
                return true;
            }
        }
    }

    false
}

/// Relocate: Move one visit to a different position in the tour.
/// Returns true if an improvement was made.
fn relocate_improve(order: &mut Vec<usize>, matrix: &DistanceMatrix) -> bool {
    let n = order.len();
    if n < 3 {
        return false;
    }

    let current_cost = tour_cost(matrix, order);

    for from in 1..n {
        for to in 1..n {
            if from == to {
                continue;
            }

            let mut candidate = order.clone();
            let node = candidate.remove(from);
            candidate.insert(to, node);

            if tour_cost(matrix, &candidate) < current_cost {
                *order = candidate;
                return true;
            }
        }
    }

    false
}

/// Run local search improvement until no more improvements or max iterations reached.
fn local_search(order: &mut Vec<usize>, matrix: &DistanceMatrix, options: &SolveOptions) {
    for _ in 0..options.local_search_iterations {
        let mut improved = false;

        if two_opt_improve(order, matrix) {
            improved = true;
        }

        if relocate_improve(order, matrix) {
            improved = true;
        }

        if !improved {
            break;
        }
    }
}
