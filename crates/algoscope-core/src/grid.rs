//! Square grid model searched by the pathfinding engine.
//!
//! A [`Grid`] is a fixed-size square of [`GridCell`]s stored in row-major
//! order. The start cell is always index `0` and the goal cell is always the
//! last index; neither may be a wall.
//!
//! # Construction
//!
//! - [`Grid::build`] scatters walls at random with a given density.
//! - [`Grid::build_weighted`] additionally scatters forest cells, which are
//!   passable but cost more for weighted searches.
//! - [`Grid::from_terrain`] and the [`FromStr`] implementation build a grid
//!   from explicit cells, which keeps tests and demos reproducible.
//!
//! ```
//! # use algoscope_core::grid::Grid;
//! let grid: Grid = "..#\n.#.\n...".parse().expect("valid layout");
//! assert_eq!(grid.size(), 3);
//! assert_eq!(grid.neighbors(0).collect::<Vec<_>>(), vec![3, 1]);
//! ```

mod terrain;

pub use terrain::Terrain;

use std::{fmt, str::FromStr};

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::trace::TraversalResult;

/// Largest accepted side length.
pub const MAX_SIZE: usize = 1024;

/// Errors raised while constructing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("Grid size must be at least 1")]
    ZeroSize,

    #[error("Grid size {0} is larger than the maximum of {max}", max = MAX_SIZE)]
    TooLarge(usize),

    #[error("Density {0} is outside the range 0.0..=1.0")]
    DensityOutOfRange(f64),

    #[error("Expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("Cell {0} is the start or goal and cannot be a wall")]
    BlockedEndpoint(usize),

    #[error("Invalid grid layout on line {line}: {message}")]
    Layout { line: usize, message: String },
}

/// A single square of the grid.
///
/// The `visited` and `on_path` flags are only ever set on working copies
/// produced by [`Grid::with_traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCell {
    terrain: Terrain,
    visited: bool,
    on_path: bool,
}

impl GridCell {
    /// Creates an unvisited cell of the given terrain.
    pub fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            visited: false,
            on_path: false,
        }
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn is_wall(&self) -> bool {
        self.terrain == Terrain::Wall
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_on_path(&self) -> bool {
        self.on_path
    }
}

/// A square grid with the start at index `0` and the goal at the last index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<GridCell>,
}

impl Grid {
    /// Builds a grid where every cell other than the start and goal becomes a
    /// wall independently with probability `density`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if `size` is zero or too large, or if `density`
    /// is outside `0.0..=1.0`.
    pub fn build<R>(size: usize, density: f64, rng: &mut R) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        Self::build_weighted(size, density, 0.0, rng)
    }

    /// Builds a cost grid with walls and forest cells.
    ///
    /// Each cell other than the start and goal draws one number in `[0, 1)`:
    /// below `wall_density` it becomes a wall, below
    /// `wall_density + forest_density` it becomes forest, otherwise it stays
    /// plain.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if `size` is zero or too large, or if either
    /// density or their sum is outside `0.0..=1.0`.
    pub fn build_weighted<R>(
        size: usize,
        wall_density: f64,
        forest_density: f64,
        rng: &mut R,
    ) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        let len = cell_count(size)?;
        for density in [wall_density, forest_density, wall_density + forest_density] {
            if !(0.0..=1.0).contains(&density) {
                return Err(GridError::DensityOutOfRange(density));
            }
        }

        let cells = (0..len)
            .map(|index| {
                if index == 0 || index == len - 1 {
                    return GridCell::new(Terrain::Plain);
                }
                let roll: f64 = rng.random();
                let terrain = if roll < wall_density {
                    Terrain::Wall
                } else if roll < wall_density + forest_density {
                    Terrain::Forest
                } else {
                    Terrain::Plain
                };
                GridCell::new(terrain)
            })
            .collect::<Vec<_>>();

        let grid = Self { size, cells };
        debug!(
            size,
            wall_density,
            forest_density,
            walls = grid.count(Terrain::Wall),
            forests = grid.count(Terrain::Forest);
            "Grid built"
        );
        Ok(grid)
    }

    /// Builds a grid from explicit row-major terrain.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the number of cells is not `size * size` or
    /// if the start or goal is a wall.
    pub fn from_terrain(
        size: usize,
        terrain: impl IntoIterator<Item = Terrain>,
    ) -> Result<Self, GridError> {
        let expected = cell_count(size)?;
        let cells: Vec<GridCell> = terrain.into_iter().map(GridCell::new).collect();
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        for endpoint in [0, expected - 1] {
            if cells[endpoint].is_wall() {
                return Err(GridError::BlockedEndpoint(endpoint));
            }
        }
        Ok(Self { size, cells })
    }

    /// Returns the side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the start cell.
    pub fn start(&self) -> usize {
        0
    }

    /// Index of the goal cell.
    pub fn goal(&self) -> usize {
        self.cells.len() - 1
    }

    /// Returns the cell at `index`, if it is inside the grid.
    pub fn cell(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Returns `true` if `index` is inside the grid and not a wall.
    pub fn is_passable(&self, index: usize) -> bool {
        self.cells
            .get(index)
            .is_some_and(|cell| cell.terrain.is_passable())
    }

    /// Returns the cost of entering `index`, or `None` for walls and
    /// out-of-range indices.
    pub fn cost(&self, index: usize) -> Option<u32> {
        self.cells.get(index).and_then(|cell| cell.terrain.cost())
    }

    /// Converts a cell index into `(row, column)`.
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Manhattan distance between two cells, saturating at `u32::MAX`.
    pub fn manhattan(&self, a: usize, b: usize) -> u32 {
        let (ar, ac) = self.coordinates(a);
        let (br, bc) = self.coordinates(b);
        u32::try_from(ar.abs_diff(br) + ac.abs_diff(bc)).unwrap_or(u32::MAX)
    }

    /// Returns the orthogonal neighbors of `index` that lie inside the grid.
    ///
    /// The order is fixed: down, up, right, left. Traversals rely on it for
    /// reproducible tie-breaking.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> {
        let size = self.size;
        let (row, col) = (index / size, index % size);
        let down = (row + 1 < size).then(|| index + size);
        let up = (row > 0).then(|| index - size);
        let right = (col + 1 < size).then(|| index + 1);
        let left = (col > 0).then(|| index - 1);
        [down, up, right, left].into_iter().flatten()
    }

    /// Returns a copy of this grid with the visited and path flags of
    /// `result` applied.
    ///
    /// Flags from any earlier traversal are cleared first, so the copy only
    /// ever reflects `result`.
    pub fn with_traversal(&self, result: &TraversalResult) -> Grid {
        let mut working = self.clone();
        for cell in &mut working.cells {
            cell.visited = false;
            cell.on_path = false;
        }
        for &index in result.visited() {
            if let Some(cell) = working.cells.get_mut(index) {
                cell.visited = true;
            }
        }
        for &index in result.path() {
            if let Some(cell) = working.cells.get_mut(index) {
                cell.on_path = true;
            }
        }
        working
    }

    fn count(&self, terrain: Terrain) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.terrain == terrain)
            .count()
    }
}

fn cell_count(size: usize) -> Result<usize, GridError> {
    if size == 0 {
        return Err(GridError::ZeroSize);
    }
    if size > MAX_SIZE {
        return Err(GridError::TooLarge(size));
    }
    Ok(size * size)
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a layout with one row per line using `.` for plain, `~` for
    /// forest and `#` for walls. Blank lines and surrounding whitespace are
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .map(|(number, line)| (number + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();
        let size = rows.len();

        let mut terrain = Vec::with_capacity(size * size);
        for (line, row) in rows {
            let before = terrain.len();
            for symbol in row.chars() {
                let cell = Terrain::from_symbol(symbol).ok_or_else(|| GridError::Layout {
                    line,
                    message: format!("unknown cell symbol `{symbol}`"),
                })?;
                terrain.push(cell);
            }
            let width = terrain.len() - before;
            if width != size {
                return Err(GridError::Layout {
                    line,
                    message: format!("expected {size} cells, found {width}"),
                });
            }
        }

        Self::from_terrain(size, terrain)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|cell| cell.terrain.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_neighbors_order_is_down_up_right_left() {
        let grid = Grid::from_terrain(3, vec![Terrain::Plain; 9]).unwrap();

        assert_eq!(grid.neighbors(4).collect::<Vec<_>>(), vec![7, 1, 5, 3]);
    }

    #[test]
    fn test_neighbors_are_clipped_at_corners() {
        let grid = Grid::from_terrain(3, vec![Terrain::Plain; 9]).unwrap();

        assert_eq!(grid.neighbors(0).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(grid.neighbors(8).collect::<Vec<_>>(), vec![5, 7]);
        assert_eq!(grid.neighbors(2).collect::<Vec<_>>(), vec![5, 1]);
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = Grid::from_terrain(1, vec![Terrain::Plain]).unwrap();

        assert_eq!(grid.start(), grid.goal());
        assert_eq!(grid.neighbors(0).count(), 0);
    }

    #[test]
    fn test_build_keeps_endpoints_open_at_full_density() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::build(5, 1.0, &mut rng).unwrap();

        assert!(!grid.cell(grid.start()).unwrap().is_wall());
        assert!(!grid.cell(grid.goal()).unwrap().is_wall());
        assert_eq!(grid.count(Terrain::Wall), 23);
    }

    #[test]
    fn test_build_with_zero_density_has_no_walls() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::build(6, 0.0, &mut rng).unwrap();

        assert_eq!(grid.count(Terrain::Wall), 0);
    }

    #[test]
    fn test_build_is_reproducible_with_same_seed() {
        let first = Grid::build_weighted(8, 0.2, 0.2, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = Grid::build_weighted(8, 0.2, 0.2, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_rejects_invalid_arguments() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(Grid::build(0, 0.2, &mut rng), Err(GridError::ZeroSize));
        assert_eq!(
            Grid::build(4, 1.5, &mut rng),
            Err(GridError::DensityOutOfRange(1.5))
        );
        assert!(matches!(
            Grid::build_weighted(4, 0.7, 0.7, &mut rng),
            Err(GridError::DensityOutOfRange(_))
        ));
        assert!(matches!(
            Grid::build(4, f64::NAN, &mut rng),
            Err(GridError::DensityOutOfRange(_))
        ));
    }

    #[test]
    fn test_size_is_bounded() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            Grid::build(MAX_SIZE + 1, 0.2, &mut rng),
            Err(GridError::TooLarge(MAX_SIZE + 1))
        );
        assert_eq!(
            Grid::build_weighted(100_000, 0.2, 0.1, &mut rng),
            Err(GridError::TooLarge(100_000))
        );
        assert_eq!(
            Grid::from_terrain(usize::MAX, Vec::new()),
            Err(GridError::TooLarge(usize::MAX))
        );
        assert_eq!(
            Grid::from_terrain(MAX_SIZE, vec![Terrain::Plain; MAX_SIZE * MAX_SIZE])
                .map(|grid| grid.len()),
            Ok(MAX_SIZE * MAX_SIZE)
        );
    }

    #[test]
    fn test_from_terrain_rejects_walled_endpoints() {
        let mut cells = vec![Terrain::Plain; 4];
        cells[3] = Terrain::Wall;

        assert_eq!(
            Grid::from_terrain(2, cells),
            Err(GridError::BlockedEndpoint(3))
        );
    }

    #[test]
    fn test_from_terrain_rejects_wrong_cell_count() {
        assert_eq!(
            Grid::from_terrain(2, vec![Terrain::Plain; 3]),
            Err(GridError::CellCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_parse_layout() {
        let grid: Grid = "
            .~#
            .#.
            ...
        "
        .parse()
        .unwrap();

        assert_eq!(grid.size(), 3);
        assert_eq!(grid.cell(1).unwrap().terrain(), Terrain::Forest);
        assert!(grid.cell(2).unwrap().is_wall());
        assert_eq!(grid.cost(1), Some(5));
        assert_eq!(grid.cost(4), None);
        assert_eq!(grid.to_string(), ".~#\n.#.\n...\n");
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = "...\n..\n...".parse::<Grid>().unwrap_err();

        assert!(matches!(err, GridError::Layout { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_symbols() {
        let err = "..\n.x".parse::<Grid>().unwrap_err();

        assert!(matches!(err, GridError::Layout { line: 2, .. }));
    }

    #[test]
    fn test_manhattan() {
        let grid = Grid::from_terrain(4, vec![Terrain::Plain; 16]).unwrap();

        assert_eq!(grid.manhattan(0, 15), 6);
        assert_eq!(grid.manhattan(5, 6), 1);
        assert_eq!(grid.manhattan(7, 7), 0);
    }

    #[test]
    fn test_manhattan_across_largest_grid() {
        let grid = Grid::from_terrain(MAX_SIZE, vec![Terrain::Plain; MAX_SIZE * MAX_SIZE]).unwrap();

        assert_eq!(
            grid.manhattan(grid.start(), grid.goal()),
            2 * (MAX_SIZE as u32 - 1)
        );
    }

    #[test]
    fn test_with_traversal_marks_copy_only() {
        let grid: Grid = "..\n..".parse().unwrap();
        let result = TraversalResult::new(
            vec![0, 2, 1, 3],
            [(2, 0), (1, 0), (3, 2)].into_iter().collect(),
            vec![0, 2, 3],
            4,
            Duration::ZERO,
        );

        let working = grid.with_traversal(&result);

        assert!(working.cells().iter().all(GridCell::is_visited));
        assert!(working.cell(2).unwrap().is_on_path());
        assert!(!working.cell(1).unwrap().is_on_path());
        assert!(grid.cells().iter().all(|cell| !cell.is_visited()));
    }
}
