use std::{collections::HashMap, time::Duration};

use crate::grid::Grid;

/// Outcome of a grid traversal.
///
/// A traversal that cannot reach the goal is still a valid result: it has
/// `reached() == false` and an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult {
    visited: Vec<usize>,
    predecessors: HashMap<usize, usize>,
    path: Vec<usize>,
    operations: u64,
    elapsed: Duration,
}

impl TraversalResult {
    /// Creates a result. The goal counts as reached when `path` is not empty.
    pub fn new(
        visited: Vec<usize>,
        predecessors: HashMap<usize, usize>,
        path: Vec<usize>,
        operations: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            visited,
            predecessors,
            path,
            operations,
            elapsed,
        }
    }

    /// Cells in the order they were processed.
    pub fn visited(&self) -> &[usize] {
        &self.visited
    }

    /// Back-pointers from a cell to the cell it was reached from.
    pub fn predecessors(&self) -> &HashMap<usize, usize> {
        &self.predecessors
    }

    /// Cells from start to goal, or empty when the goal was not reached.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn reached(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn operations(&self) -> u64 {
        self.operations
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of moves along the path.
    pub fn path_steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Total terrain cost of every path cell after the start.
    pub fn path_cost(&self, grid: &Grid) -> u32 {
        self.path
            .iter()
            .skip(1)
            .filter_map(|&index| grid.cost(index))
            .sum()
    }
}
