//! Pathfinding engine.
//!
//! Every search starts at the grid's start cell, stops when it processes the
//! goal, and returns a [`TraversalResult`] with the processing order, the
//! back-pointers and the reconstructed path.
//!
//! - [`traverse`] runs breadth-first or depth-first search. Both share one
//!   skeleton; the only difference is which end of the frontier is popped.
//!   Terrain cost is ignored, so forest counts as a single step.
//! - [`dijkstra`] and [`a_star`] charge the terrain cost of every cell
//!   entered (plain 1, forest 5, walls impassable).
//!
//! An unreachable goal is a normal outcome: the result reports
//! `reached() == false` and an empty path.

mod astar;
mod dijkstra;
mod frontier;

pub use astar::a_star;
pub use dijkstra::dijkstra;

use std::{collections::HashMap, fmt, str::FromStr, time::Instant};

use log::{debug, info};
use serde::Deserialize;

use algoscope_core::{grid::Grid, trace::TraversalResult};

use frontier::Frontier;

/// Frontier discipline for the unweighted traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// First in, first out.
    Bfs,
    /// Last in, first out.
    Dfs,
}

/// Available pathfinding algorithms.
///
/// The names match external configuration strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    /// Breadth-first search (default)
    #[default]
    Bfs,
    /// Depth-first search
    Dfs,
    /// Dijkstra's algorithm over terrain costs
    Dijkstra,
    /// A* over terrain costs with a Manhattan heuristic
    #[serde(rename = "astar")]
    AStar,
}

impl PathAlgorithm {
    /// All algorithms, in the order they are usually compared.
    pub const ALL: [PathAlgorithm; 4] = [
        PathAlgorithm::Bfs,
        PathAlgorithm::Dfs,
        PathAlgorithm::Dijkstra,
        PathAlgorithm::AStar,
    ];

    /// Returns `true` for the algorithms that charge terrain cost.
    pub fn is_weighted(self) -> bool {
        matches!(self, PathAlgorithm::Dijkstra | PathAlgorithm::AStar)
    }

    /// Returns the asymptotic running time, for display next to a result.
    pub fn complexity(self) -> &'static str {
        match self {
            PathAlgorithm::Bfs | PathAlgorithm::Dfs => "O(V + E)",
            PathAlgorithm::Dijkstra | PathAlgorithm::AStar => "O((V + E) log V)",
        }
    }
}

impl FromStr for PathAlgorithm {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" => Ok(Self::AStar),
            _ => Err("Unsupported pathfinding algorithm"),
        }
    }
}

impl From<PathAlgorithm> for &'static str {
    fn from(val: PathAlgorithm) -> Self {
        match val {
            PathAlgorithm::Bfs => "bfs",
            PathAlgorithm::Dfs => "dfs",
            PathAlgorithm::Dijkstra => "dijkstra",
            PathAlgorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Runs `algorithm` on `grid`.
pub fn find_path(algorithm: PathAlgorithm, grid: &Grid) -> TraversalResult {
    let result = match algorithm {
        PathAlgorithm::Bfs => traverse(TraversalMode::Bfs, grid),
        PathAlgorithm::Dfs => traverse(TraversalMode::Dfs, grid),
        PathAlgorithm::Dijkstra => dijkstra(grid),
        PathAlgorithm::AStar => a_star(grid),
    };
    info!(
        algorithm:% = algorithm,
        reached = result.reached(),
        visited = result.visited().len(),
        path_len = result.path().len(),
        operations = result.operations();
        "Traversal finished"
    );
    result
}

/// Breadth-first or depth-first search over passable cells.
///
/// A cell may sit on the frontier several times but is processed once;
/// later copies are dropped when popped. A cell's back-pointer is set the
/// first time it is discovered and never updated, so BFS paths are shortest
/// in steps while DFS paths need not be.
pub fn traverse(mode: TraversalMode, grid: &Grid) -> TraversalResult {
    let started = Instant::now();
    let (start, goal) = (grid.start(), grid.goal());
    let mut processed = vec![false; grid.len()];
    let mut visited = Vec::new();
    let mut predecessors = HashMap::new();
    let mut operations = 0;

    if endpoints_open(grid) {
        let mut frontier = Frontier::new(mode);
        frontier.push(start);

        while let Some(current) = frontier.pop() {
            if processed[current] {
                continue;
            }
            processed[current] = true;
            visited.push(current);
            operations += 1;

            if current == goal {
                break;
            }

            for neighbor in grid.neighbors(current) {
                if !grid.is_passable(neighbor) || processed[neighbor] {
                    continue;
                }
                predecessors.entry(neighbor).or_insert(current);
                frontier.push(neighbor);
            }
        }
    }

    let path = if processed[goal] {
        reconstruct_path(&predecessors, start, goal)
    } else {
        debug!(mode:? = mode, visited = visited.len(); "Goal not reached");
        Vec::new()
    };

    TraversalResult::new(visited, predecessors, path, operations, started.elapsed())
}

/// Returns `false` if the start or the goal is a wall.
fn endpoints_open(grid: &Grid) -> bool {
    let open = grid.is_passable(grid.start()) && grid.is_passable(grid.goal());
    if !open {
        debug!("Start or goal is a wall");
    }
    open
}

/// Follows back-pointers from `goal` to `start` and returns the path in
/// start-to-goal order, or an empty path if the chain is broken.
fn reconstruct_path(predecessors: &HashMap<usize, usize>, start: usize, goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(&previous) = predecessors.get(&current) else {
            return Vec::new();
        };
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(size: usize) -> Grid {
        vec![".".repeat(size); size].join("\n").parse().unwrap()
    }

    #[test]
    fn test_bfs_visit_order_on_open_grid() {
        let result = traverse(TraversalMode::Bfs, &open_grid(3));

        assert_eq!(result.visited(), &[0, 3, 1, 6, 4, 2, 7, 5, 8]);
        assert_eq!(result.path(), &[0, 3, 6, 7, 8]);
        assert_eq!(result.operations(), 9);
        assert!(result.reached());
    }

    #[test]
    fn test_dfs_visit_order_on_open_grid() {
        let result = traverse(TraversalMode::Dfs, &open_grid(3));

        assert_eq!(result.visited(), &[0, 1, 2, 5, 4, 3, 6, 7, 8]);
        assert_eq!(result.path(), &[0, 1, 2, 5, 8]);
        assert!(result.reached());
    }

    #[test]
    fn test_first_discovery_wins() {
        let result = traverse(TraversalMode::Bfs, &open_grid(3));

        // Cell 4 is discovered from 3 before 1 is processed.
        assert_eq!(result.predecessors().get(&4), Some(&3));
    }

    #[test]
    fn test_unreachable_goal_is_not_an_error() {
        let grid: Grid = ".#\n#.".parse().unwrap();

        for algorithm in PathAlgorithm::ALL {
            let result = find_path(algorithm, &grid);
            assert!(!result.reached(), "{algorithm}");
            assert!(result.path().is_empty(), "{algorithm}");
            assert_eq!(result.visited(), &[0], "{algorithm}");
        }
    }

    #[test]
    fn test_single_cell_grid() {
        let grid: Grid = ".".parse().unwrap();

        for algorithm in PathAlgorithm::ALL {
            let result = find_path(algorithm, &grid);
            assert_eq!(result.path(), &[0], "{algorithm}");
            assert_eq!(result.path_steps(), 0, "{algorithm}");
        }
    }

    #[test]
    fn test_weighted_searches_avoid_forest() {
        let grid: Grid = ".~~\n...\n~~.".parse().unwrap();

        let dijkstra = find_path(PathAlgorithm::Dijkstra, &grid);
        assert_eq!(dijkstra.path(), &[0, 3, 4, 5, 8]);
        assert_eq!(dijkstra.path_cost(&grid), 4);

        let a_star = find_path(PathAlgorithm::AStar, &grid);
        assert_eq!(a_star.visited(), &[0, 3, 4, 5, 8]);
        assert_eq!(a_star.path(), &[0, 3, 4, 5, 8]);

        let bfs = find_path(PathAlgorithm::Bfs, &grid);
        assert_eq!(bfs.path(), &[0, 3, 6, 7, 8]);
        assert_eq!(bfs.path_cost(&grid), 12);
    }

    #[test]
    fn test_detour_around_walls() {
        let grid: Grid = "
            ....
            ###.
            ....
            .##.
        "
        .parse()
        .unwrap();

        for algorithm in PathAlgorithm::ALL {
            let result = find_path(algorithm, &grid);
            assert_eq!(result.path(), &[0, 1, 2, 3, 7, 11, 15], "{algorithm}");
        }
    }

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in PathAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<PathAlgorithm>(), Ok(algorithm));
        }
        assert!("greedy".parse::<PathAlgorithm>().is_err());
    }

    #[test]
    fn test_reconstruct_path_with_broken_chain() {
        let predecessors: HashMap<usize, usize> = [(5, 4)].into_iter().collect();

        assert!(reconstruct_path(&predecessors, 0, 5).is_empty());
    }
}

#[cfg(test)]
mod proptest_tests {
    use std::collections::VecDeque;

    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn grid_strategy() -> impl Strategy<Value = Grid> {
        (1usize..10, 0.0f64..0.5, any::<u64>()).prop_map(|(size, density, seed)| {
            Grid::build(size, density, &mut StdRng::seed_from_u64(seed))
                .expect("strategy produces valid arguments")
        })
    }

    fn weighted_grid_strategy() -> impl Strategy<Value = Grid> {
        (1usize..10, 0.0f64..0.4, 0.0f64..0.4, any::<u64>()).prop_map(
            |(size, walls, forest, seed)| {
                Grid::build_weighted(size, walls, forest, &mut StdRng::seed_from_u64(seed))
                    .expect("strategy produces valid arguments")
            },
        )
    }

    /// Step distance from the start to the goal, computed independently of
    /// the engine.
    fn shortest_steps(grid: &Grid) -> Option<usize> {
        let mut distance = vec![None; grid.len()];
        let mut queue = VecDeque::from([grid.start()]);
        distance[grid.start()] = Some(0);
        while let Some(current) = queue.pop_front() {
            let next = distance[current].map(|d| d + 1);
            for neighbor in grid.neighbors(current) {
                if grid.is_passable(neighbor) && distance[neighbor].is_none() {
                    distance[neighbor] = next;
                    queue.push_back(neighbor);
                }
            }
        }
        distance[grid.goal()]
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every reported path starts at the start, ends at the goal, and moves
    /// between adjacent passable cells.
    fn check_paths_are_valid(grid: &Grid) -> Result<(), TestCaseError> {
        for algorithm in PathAlgorithm::ALL {
            let result = find_path(algorithm, grid);
            prop_assert_eq!(result.reached(), shortest_steps(grid).is_some());
            if !result.reached() {
                prop_assert!(result.path().is_empty());
                continue;
            }
            prop_assert_eq!(result.path().first(), Some(&grid.start()));
            prop_assert_eq!(result.path().last(), Some(&grid.goal()));
            for pair in result.path().windows(2) {
                prop_assert_eq!(grid.manhattan(pair[0], pair[1]), 1);
                prop_assert!(grid.is_passable(pair[1]));
            }
        }
        Ok(())
    }

    /// BFS and DFS process each cell at most once.
    fn check_cells_processed_once(grid: &Grid) -> Result<(), TestCaseError> {
        for mode in [TraversalMode::Bfs, TraversalMode::Dfs] {
            let result = traverse(mode, grid);
            let mut seen = vec![false; grid.len()];
            for &cell in result.visited() {
                prop_assert!(!seen[cell], "{mode:?} processed {cell} twice");
                seen[cell] = true;
            }
            prop_assert_eq!(result.operations(), result.visited().len() as u64);
        }
        Ok(())
    }

    /// BFS finds a shortest path in steps.
    fn check_bfs_is_shortest(grid: &Grid) -> Result<(), TestCaseError> {
        let result = traverse(TraversalMode::Bfs, grid);
        if let Some(steps) = shortest_steps(grid) {
            prop_assert_eq!(result.path_steps(), steps);
        }
        Ok(())
    }

    /// On uniform cost grids the weighted searches match the BFS step count.
    fn check_weighted_match_bfs_on_plain_grid(grid: &Grid) -> Result<(), TestCaseError> {
        let bfs = traverse(TraversalMode::Bfs, grid);
        for result in [dijkstra(grid), a_star(grid)] {
            prop_assert_eq!(result.reached(), bfs.reached());
            prop_assert_eq!(result.path_cost(grid) as usize, bfs.path_steps());
        }
        Ok(())
    }

    /// A* with an admissible heuristic finds paths as cheap as Dijkstra's.
    fn check_a_star_matches_dijkstra_cost(grid: &Grid) -> Result<(), TestCaseError> {
        let expected = dijkstra(grid);
        let result = a_star(grid);
        prop_assert_eq!(result.reached(), expected.reached());
        prop_assert_eq!(result.path_cost(grid), expected.path_cost(grid));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn paths_are_valid(grid in weighted_grid_strategy()) {
            check_paths_are_valid(&grid)?;
        }

        #[test]
        fn cells_processed_once(grid in weighted_grid_strategy()) {
            check_cells_processed_once(&grid)?;
        }

        #[test]
        fn bfs_is_shortest(grid in grid_strategy()) {
            check_bfs_is_shortest(&grid)?;
        }

        #[test]
        fn weighted_match_bfs_on_plain_grid(grid in grid_strategy()) {
            check_weighted_match_bfs_on_plain_grid(&grid)?;
        }

        #[test]
        fn a_star_matches_dijkstra_cost(grid in weighted_grid_strategy()) {
            check_a_star_matches_dijkstra_cost(&grid)?;
        }
    }
}
