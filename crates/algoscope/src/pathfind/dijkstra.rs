//! Dijkstra's algorithm over terrain costs.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    time::Instant,
};

use log::debug;

use algoscope_core::{grid::Grid, trace::TraversalResult};

use super::{endpoints_open, reconstruct_path};

/// Repeatedly settles the unsettled cell with the smallest known distance
/// and relaxes its neighbors, recording a back-pointer on every relaxation.
///
/// Ties between equal distances go to the lower cell index. The search stops
/// when the goal is settled or when no reachable cell is left.
pub fn dijkstra(grid: &Grid) -> TraversalResult {
    let started = Instant::now();
    let (start, goal) = (grid.start(), grid.goal());
    let mut distance = vec![u64::MAX; grid.len()];
    let mut settled = vec![false; grid.len()];
    let mut visited = Vec::new();
    let mut predecessors = HashMap::new();
    let mut operations = 0;

    if endpoints_open(grid) {
        let mut queue = BinaryHeap::new();
        distance[start] = 0;
        queue.push(Reverse((0, start)));

        while let Some(Reverse((current_distance, current))) = queue.pop() {
            if settled[current] || current_distance > distance[current] {
                continue;
            }
            settled[current] = true;
            visited.push(current);
            operations += 1;

            if current == goal {
                break;
            }

            for neighbor in grid.neighbors(current) {
                let Some(cost) = grid.cost(neighbor) else {
                    continue;
                };
                if settled[neighbor] {
                    continue;
                }
                let alternative = current_distance + u64::from(cost);
                if alternative < distance[neighbor] {
                    distance[neighbor] = alternative;
                    predecessors.insert(neighbor, current);
                    queue.push(Reverse((alternative, neighbor)));
                }
            }
        }
    }

    let path = if settled[goal] {
        debug!(cost = distance[goal]; "Dijkstra reached the goal");
        reconstruct_path(&predecessors, start, goal)
    } else {
        debug!(settled = visited.len(); "Dijkstra exhausted reachable cells");
        Vec::new()
    };

    TraversalResult::new(visited, predecessors, path, operations, started.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settles_in_distance_then_index_order() {
        let grid: Grid = "...\n...\n...".parse().unwrap();

        let result = dijkstra(&grid);

        assert_eq!(result.visited(), &[0, 1, 3, 2, 4, 6, 5, 7, 8]);
        assert_eq!(result.path(), &[0, 1, 2, 5, 8]);
    }

    #[test]
    fn test_unreachable_after_exhausting_cells() {
        let grid: Grid = "..#\n.#.\n#..".parse().unwrap();

        let result = dijkstra(&grid);

        assert!(!result.reached());
        assert_eq!(result.visited(), &[0, 1, 3]);
        assert_eq!(result.operations(), 3);
    }

    #[test]
    fn test_forest_is_entered_when_it_is_the_only_way() {
        let grid: Grid = ".#\n~.".parse().unwrap();

        let result = dijkstra(&grid);

        assert_eq!(result.path(), &[0, 2, 3]);
        assert_eq!(result.path_cost(&grid), 6);
    }
}
