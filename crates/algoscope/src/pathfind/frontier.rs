use std::collections::VecDeque;

use super::TraversalMode;

/// Discovered cells waiting to be processed.
///
/// BFS and DFS share this one structure and differ only in which end
/// [`Frontier::pop`] takes from.
#[derive(Debug)]
pub(super) struct Frontier {
    cells: VecDeque<usize>,
    mode: TraversalMode,
}

impl Frontier {
    pub(super) fn new(mode: TraversalMode) -> Self {
        Self {
            cells: VecDeque::new(),
            mode,
        }
    }

    pub(super) fn push(&mut self, cell: usize) {
        self.cells.push_back(cell);
    }

    pub(super) fn pop(&mut self) -> Option<usize> {
        match self.mode {
            TraversalMode::Bfs => self.cells.pop_front(),
            TraversalMode::Dfs => self.cells.pop_back(),
        }
    }
}
