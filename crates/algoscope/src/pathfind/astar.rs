//! A* search over terrain costs.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    time::Instant,
};

use log::debug;

use algoscope_core::{grid::Grid, trace::TraversalResult};

use super::{endpoints_open, reconstruct_path};

/// Expands the open cell with the lowest `f = g + h`, where `g` is the path
/// cost so far and `h` is the Manhattan distance to the goal.
///
/// A neighbor is updated whenever a strictly lower `g` is found. Among equal
/// `f` scores the cell that entered the open set first is expanded first; a
/// cell keeps its place in that order while its score improves. The search
/// ends when the goal is expanded or the open set is empty.
pub fn a_star(grid: &Grid) -> TraversalResult {
    let started = Instant::now();
    let (start, goal) = (grid.start(), grid.goal());
    let heuristic = |cell: usize| u64::from(grid.manhattan(cell, goal));

    let mut g_score = vec![u64::MAX; grid.len()];
    // Insertion sequence of each cell currently in the open set.
    let mut open: Vec<Option<u64>> = vec![None; grid.len()];
    let mut next_sequence = 0;
    let mut visited = Vec::new();
    let mut predecessors = HashMap::new();
    let mut operations = 0;
    let mut reached = false;

    if endpoints_open(grid) {
        let mut queue = BinaryHeap::new();
        g_score[start] = 0;
        open[start] = Some(next_sequence);
        queue.push(Reverse((heuristic(start), next_sequence, start)));
        next_sequence += 1;

        while let Some(Reverse((f_score, sequence, current))) = queue.pop() {
            let stale = open[current] != Some(sequence)
                || f_score != g_score[current] + heuristic(current);
            if stale {
                continue;
            }
            open[current] = None;
            visited.push(current);
            operations += 1;

            if current == goal {
                reached = true;
                break;
            }

            for neighbor in grid.neighbors(current) {
                let Some(cost) = grid.cost(neighbor) else {
                    continue;
                };
                let tentative = g_score[current] + u64::from(cost);
                if tentative < g_score[neighbor] {
                    predecessors.insert(neighbor, current);
                    g_score[neighbor] = tentative;
                    let sequence = *open[neighbor].get_or_insert_with(|| {
                        next_sequence += 1;
                        next_sequence - 1
                    });
                    queue.push(Reverse((tentative + heuristic(neighbor), sequence, neighbor)));
                }
            }
        }
    }

    let path = if reached {
        debug!(cost = g_score[goal]; "A* reached the goal");
        reconstruct_path(&predecessors, start, goal)
    } else {
        debug!(expanded = visited.len(); "A* open set exhausted");
        Vec::new()
    };

    TraversalResult::new(visited, predecessors, path, operations, started.elapsed())
}
