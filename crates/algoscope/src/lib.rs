//! Algoscope - step-by-step traces of classic algorithms.
//!
//! Sorting (selection, quick, bubble), searching (linear, binary) and grid
//! pathfinding (BFS, DFS, Dijkstra, A*). Every engine returns a complete
//! trace of what it did, so a renderer can replay the run at any pace.

pub mod config;
pub mod dataset;
pub mod pathfind;
pub mod search;
pub mod sort;

mod error;

pub use algoscope_core::{cancel, grid, trace};

pub use error::AlgoscopeError;

use log::{debug, info};
use rand::Rng;

use config::AppConfig;
use grid::Grid;
use pathfind::PathAlgorithm;
use search::SearchComparison;
use sort::SortAlgorithm;
use trace::{SortTrace, TraversalResult};

/// Entry point that ties an [`AppConfig`] to the engines.
///
/// The engines themselves are plain functions in [`sort`], [`search`] and
/// [`pathfind`]; `TraceLab` adds dataset and grid generation driven by the
/// configuration.
///
/// # Examples
///
/// ```
/// use algoscope::{TraceLab, config::AppConfig, sort::SortAlgorithm};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let lab = TraceLab::new(AppConfig::default());
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let values = lab.dataset(&mut rng).unwrap();
/// let trace = lab.sort(&values, SortAlgorithm::Quick);
/// assert!(trace.final_frame().is_sorted());
/// ```
#[derive(Debug, Default)]
pub struct TraceLab {
    config: AppConfig,
}

impl TraceLab {
    /// Creates a lab with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Generates a dataset using the configured size and value range.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoscopeError::InvalidArgument`] if the configured size is
    /// zero or the range is inverted.
    pub fn dataset<R>(&self, rng: &mut R) -> Result<Vec<i64>, AlgoscopeError>
    where
        R: Rng + ?Sized,
    {
        let dataset = self.config.dataset();
        dataset::random_values(dataset.size(), dataset.min_value(), dataset.max_value(), rng)
    }

    /// Records a sort trace of `values`.
    pub fn sort(&self, values: &[i64], algorithm: SortAlgorithm) -> SortTrace {
        info!(algorithm:% = algorithm, len = values.len(); "Sorting");
        sort::sort_trace(values, algorithm)
    }

    /// Sorts a copy of `values` and runs both searches for `target` on it.
    pub fn search(&self, values: &[i64], target: i64) -> SearchComparison {
        info!(len = values.len(), sought = target; "Searching");
        let comparison = search::compare_searches(values, target);
        debug!(
            linear = comparison.linear().operations(),
            binary = comparison.binary().operations();
            "Search operations"
        );
        comparison
    }

    /// Builds a grid from the configured size and densities.
    ///
    /// A grid without forest is built with [`Grid::build`]; otherwise
    /// [`Grid::build_weighted`] is used.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoscopeError::Grid`] if the configured size or densities
    /// cannot describe a grid.
    pub fn build_grid<R>(&self, rng: &mut R) -> Result<Grid, AlgoscopeError>
    where
        R: Rng + ?Sized,
    {
        let config = self.config.grid();
        let walls = f64::from(config.obstacle_density()) / 100.0;
        let forest = f64::from(config.forest_density()) / 100.0;

        let grid = if config.forest_density() == 0 {
            Grid::build(config.size(), walls, rng)?
        } else {
            Grid::build_weighted(config.size(), walls, forest, rng)?
        };
        info!(size = grid.size(), walls, forest; "Grid generated");
        Ok(grid)
    }

    /// Runs `algorithm` on `grid`.
    pub fn find_path(&self, grid: &Grid, algorithm: PathAlgorithm) -> TraversalResult {
        pathfind::find_path(algorithm, grid)
    }

    /// Runs every pathfinding algorithm on the same grid, in
    /// [`PathAlgorithm::ALL`] order.
    pub fn compare_paths(&self, grid: &Grid) -> Vec<(PathAlgorithm, TraversalResult)> {
        PathAlgorithm::ALL
            .into_iter()
            .map(|algorithm| (algorithm, pathfind::find_path(algorithm, grid)))
            .collect()
    }
}
