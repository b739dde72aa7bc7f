//! Configuration types for algoscope runs.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every section and field is optional and falls back to the
//! defaults listed on each type.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`DatasetConfig`] - Size and value range of generated datasets.
//! - [`GridConfig`] - Size and terrain densities of generated grids.
//! - [`PlaybackConfig`] - Delays used when a trace is played back.
//!
//! # Example
//!
//! ```
//! # use algoscope::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.dataset().size(), 12);
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use serde::Deserialize;

use algoscope_core::grid::MAX_SIZE;

use crate::AlgoscopeError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Dataset generation section.
    #[serde(default)]
    dataset: DatasetConfig,

    /// Grid generation section.
    #[serde(default)]
    grid: GridConfig,

    /// Playback pacing section.
    #[serde(default)]
    playback: PlaybackConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(dataset: DatasetConfig, grid: GridConfig, playback: PlaybackConfig) -> Self {
        Self {
            dataset,
            grid,
            playback,
        }
    }

    /// Returns the dataset configuration.
    pub fn dataset(&self) -> &DatasetConfig {
        &self.dataset
    }

    /// Returns the grid configuration.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the playback configuration.
    pub fn playback(&self) -> &PlaybackConfig {
        &self.playback
    }

    /// Returns the dataset configuration for modification.
    pub fn dataset_mut(&mut self) -> &mut DatasetConfig {
        &mut self.dataset
    }

    /// Returns the grid configuration for modification.
    pub fn grid_mut(&mut self) -> &mut GridConfig {
        &mut self.grid
    }

    /// Returns the playback configuration for modification.
    pub fn playback_mut(&mut self) -> &mut PlaybackConfig {
        &mut self.playback
    }

    /// Checks that every section describes something that can be generated.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoscopeError::Config`] for a zero dataset or grid size,
    /// a grid size above [`MAX_SIZE`], an inverted value range, a density above 100 percent, or wall and
    /// forest densities that add up to more than 100 percent.
    pub fn validate(&self) -> Result<(), AlgoscopeError> {
        let dataset = &self.dataset;
        if dataset.size == 0 {
            return Err(AlgoscopeError::Config(
                "dataset.size must be at least 1".to_string(),
            ));
        }
        if dataset.min_value > dataset.max_value {
            return Err(AlgoscopeError::Config(format!(
                "dataset.min_value ({}) is greater than dataset.max_value ({})",
                dataset.min_value, dataset.max_value
            )));
        }

        let grid = &self.grid;
        if grid.size == 0 {
            return Err(AlgoscopeError::Config(
                "grid.size must be at least 1".to_string(),
            ));
        }
        if grid.size > MAX_SIZE {
            return Err(AlgoscopeError::Config(format!(
                "grid.size is {}, the largest supported grid is {MAX_SIZE}",
                grid.size
            )));
        }
        for (name, value) in [
            ("grid.obstacle_density", grid.obstacle_density),
            ("grid.forest_density", grid.forest_density),
        ] {
            if value > 100 {
                return Err(AlgoscopeError::Config(format!(
                    "{name} is a percentage, got {value}"
                )));
            }
        }
        if grid.obstacle_density + grid.forest_density > 100 {
            return Err(AlgoscopeError::Config(format!(
                "grid.obstacle_density and grid.forest_density add up to {} percent",
                grid.obstacle_density + grid.forest_density
            )));
        }

        Ok(())
    }
}

/// Dataset generation settings.
///
/// Defaults: 12 values drawn from `5..=95`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    size: usize,
    min_value: i64,
    max_value: i64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            size: 12,
            min_value: 5,
            max_value: 95,
        }
    }
}

impl DatasetConfig {
    /// Creates a new [`DatasetConfig`].
    ///
    /// # Arguments
    ///
    /// * `size` - Number of values to generate.
    /// * `min_value` - Smallest value that can be drawn.
    /// * `max_value` - Largest value that can be drawn.
    pub fn new(size: usize, min_value: i64, max_value: i64) -> Self {
        Self {
            size,
            min_value,
            max_value,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}

/// Grid generation settings.
///
/// Densities are whole percentages. Defaults: an 8x8 grid with 20 percent
/// walls, no forest, and a fresh random seed on every run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    size: usize,
    obstacle_density: u8,
    forest_density: u8,
    seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 8,
            obstacle_density: 20,
            forest_density: 0,
            seed: None,
        }
    }
}

impl GridConfig {
    /// Creates a new [`GridConfig`].
    ///
    /// # Arguments
    ///
    /// * `size` - Number of rows and columns.
    /// * `obstacle_density` - Percentage of cells that become walls.
    /// * `forest_density` - Percentage of cells that become forest.
    /// * `seed` - Seed for reproducible grids, or `None` for a random one.
    pub fn new(size: usize, obstacle_density: u8, forest_density: u8, seed: Option<u64>) -> Self {
        Self {
            size,
            obstacle_density,
            forest_density,
            seed,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn obstacle_density(&self) -> u8 {
        self.obstacle_density
    }

    pub fn forest_density(&self) -> u8 {
        self.forest_density
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    pub fn set_obstacle_density(&mut self, percent: u8) {
        self.obstacle_density = percent;
    }

    pub fn set_forest_density(&mut self, percent: u8) {
        self.forest_density = percent;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }
}

/// Delays between rendered items during playback, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    frame_delay_ms: u64,
    step_delay_ms: u64,
    probe_delay_ms: u64,
    cell_delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 120,
            step_delay_ms: 50,
            probe_delay_ms: 100,
            cell_delay_ms: 20,
        }
    }
}

impl PlaybackConfig {
    /// Creates a config that uses the same delay everywhere.
    pub fn uniform(delay_ms: u64) -> Self {
        Self {
            frame_delay_ms: delay_ms,
            step_delay_ms: delay_ms,
            probe_delay_ms: delay_ms,
            cell_delay_ms: delay_ms,
        }
    }

    /// Delay between sort frames.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Delay between bubble sort events.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Delay between search probes.
    pub fn probe_delay(&self) -> Duration {
        Duration::from_millis(self.probe_delay_ms)
    }

    /// Delay between visited grid cells.
    pub fn cell_delay(&self) -> Duration {
        Duration::from_millis(self.cell_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.grid().size(), 8);
        assert_eq!(config.grid().obstacle_density(), 20);
        assert_eq!(config.playback().frame_delay(), Duration::from_millis(120));
    }

    #[test]
    fn test_partial_sections_keep_remaining_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [dataset]
            size = 30

            [grid]
            forest_density = 15
            seed = 7

            [playback]
            cell_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset().size(), 30);
        assert_eq!(config.dataset().min_value(), 5);
        assert_eq!(config.grid().forest_density(), 15);
        assert_eq!(config.grid().obstacle_density(), 20);
        assert_eq!(config.grid().seed(), Some(7));
        assert_eq!(config.playback().cell_delay(), Duration::ZERO);
        assert_eq!(config.playback().probe_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_negative_percentage_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[grid]\nobstacle_density = -5");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let mut config = AppConfig::default();
        config.dataset_mut().set_size(0);
        assert!(matches!(config.validate(), Err(AlgoscopeError::Config(_))));

        let mut config = AppConfig::default();
        config.grid_mut().set_size(0);
        assert!(matches!(config.validate(), Err(AlgoscopeError::Config(_))));
    }

    #[test]
    fn test_validate_bounds_grid_size() {
        let mut config = AppConfig::default();
        config.grid_mut().set_size(MAX_SIZE);
        assert!(config.validate().is_ok());

        config.grid_mut().set_size(MAX_SIZE + 1);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AlgoscopeError::Config(_)));
        assert!(err.to_string().contains("grid.size"));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = AppConfig::new(
            DatasetConfig::new(4, 10, 1),
            GridConfig::default(),
            PlaybackConfig::default(),
        );

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_value"));
    }

    #[test]
    fn test_validate_rejects_densities_over_full() {
        let config = AppConfig::new(
            DatasetConfig::default(),
            GridConfig::new(8, 101, 0, None),
            PlaybackConfig::default(),
        );
        assert!(config.validate().is_err());

        let config = AppConfig::new(
            DatasetConfig::default(),
            GridConfig::new(8, 60, 50, None),
            PlaybackConfig::default(),
        );
        assert!(config.validate().is_err());

        let config = AppConfig::new(
            DatasetConfig::default(),
            GridConfig::new(8, 50, 50, None),
            PlaybackConfig::default(),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_uniform_playback() {
        let playback = PlaybackConfig::uniform(0);

        assert_eq!(playback.frame_delay(), Duration::ZERO);
        assert_eq!(playback.step_delay(), Duration::ZERO);
        assert_eq!(playback.probe_delay(), Duration::ZERO);
        assert_eq!(playback.cell_delay(), Duration::ZERO);
    }
}
