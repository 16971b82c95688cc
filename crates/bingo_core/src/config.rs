//! Simulation configuration.
//!
//! This module provides the validated configuration consumed by the parallel
//! executor: board geometry, trial count, seeding and draw-source selection.

use crate::board::Geometry;
use crate::error::ConfigError;
use crate::rng::EngineKind;

/// Maximum number of independent trials allowed in one batch.
pub const MAX_TRIALS: usize = 100_000_000;

/// Maximum row or column count allowed for the board.
pub const MAX_DIMENSION: u32 = 64;

/// Simulation configuration.
///
/// Immutable configuration specifying the board geometry, the number of
/// independent trials and the draw-source setup. Use
/// [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use bingo_core::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .rows(5)
///     .columns(5)
///     .trials(100_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.geometry().cell_count(), 25);
/// assert_eq!(config.trials(), 100_000);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Board geometry (rows × columns).
    geometry: Geometry,
    /// Number of independent trials to run.
    trials: usize,
    /// Optional base seed for reproducibility.
    seed: Option<u64>,
    /// Draw-source engine selection.
    engine: EngineKind,
    /// Use one shared mutex-guarded draw source instead of per-trial sources.
    shared_source: bool,
    /// Record per-cell fill events alongside per-line events.
    track_cells: bool,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the board geometry.
    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Returns the number of independent trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the optional base seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the selected draw-source engine.
    #[inline]
    pub fn engine(&self) -> EngineKind {
        self.engine
    }

    /// Returns whether trials share one mutex-guarded draw source.
    #[inline]
    pub fn shared_source(&self) -> bool {
        self.shared_source
    }

    /// Returns whether per-cell fill events are recorded.
    #[inline]
    pub fn track_cells(&self) -> bool {
        self.track_cells
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `rows` or `columns` is 0 or greater than [`MAX_DIMENSION`]
    /// - `trials` is 0 or greater than [`MAX_TRIALS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.geometry.rows == 0 || self.geometry.rows > MAX_DIMENSION {
            return Err(ConfigError::InvalidRowCount(self.geometry.rows));
        }
        if self.geometry.columns == 0 || self.geometry.columns > MAX_DIMENSION {
            return Err(ConfigError::InvalidColumnCount(self.geometry.columns));
        }
        if self.trials == 0 || self.trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.trials));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Provides a fluent API for constructing simulation configurations with
/// validation at build time.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    rows: Option<u32>,
    columns: Option<u32>,
    trials: Option<usize>,
    seed: Option<u64>,
    engine: EngineKind,
    shared_source: bool,
    track_cells: bool,
}

impl SimulationConfigBuilder {
    /// Sets the number of board rows.
    #[inline]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Sets the number of board columns.
    #[inline]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Sets the number of independent trials.
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Sets the base seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the draw-source engine.
    #[inline]
    pub fn engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    /// Selects one shared mutex-guarded draw source for all trials.
    ///
    /// Serialises draws across workers; per-trial private sources (the
    /// default) avoid the contention entirely.
    #[inline]
    pub fn shared_source(mut self, shared: bool) -> Self {
        self.shared_source = shared;
        self
    }

    /// Enables recording of per-cell fill events.
    #[inline]
    pub fn track_cells(mut self, track: bool) -> Self {
        self.track_cells = track;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required parameter is missing or any
    /// parameter is out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let rows = self.rows.ok_or(ConfigError::MissingParameter("rows"))?;
        let columns = self
            .columns
            .ok_or(ConfigError::MissingParameter("columns"))?;
        let trials = self.trials.ok_or(ConfigError::MissingParameter("trials"))?;

        let config = SimulationConfig {
            geometry: Geometry::new(rows, columns),
            trials,
            seed: self.seed,
            engine: self.engine,
            shared_source: self.shared_source,
            track_cells: self.track_cells,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = SimulationConfig::builder()
            .rows(5)
            .columns(5)
            .trials(100_000)
            .build()
            .unwrap();

        assert_eq!(config.geometry().rows, 5);
        assert_eq!(config.geometry().columns, 5);
        assert_eq!(config.trials(), 100_000);
        assert_eq!(config.seed(), None);
        assert_eq!(config.engine(), EngineKind::Standard);
        assert!(!config.shared_source());
        assert!(!config.track_cells());
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = SimulationConfig::builder()
            .rows(5)
            .columns(5)
            .trials(1000)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_builder_with_engine_and_flags() {
        let config = SimulationConfig::builder()
            .rows(4)
            .columns(6)
            .trials(1000)
            .engine(EngineKind::Fast)
            .shared_source(true)
            .track_cells(true)
            .build()
            .unwrap();

        assert_eq!(config.engine(), EngineKind::Fast);
        assert!(config.shared_source());
        assert!(config.track_cells());
        assert_eq!(config.geometry().line_count(), 10);
    }

    #[test]
    fn test_config_invalid_zero_rows() {
        let result = SimulationConfig::builder()
            .rows(0)
            .columns(5)
            .trials(1000)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidRowCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_columns() {
        let result = SimulationConfig::builder()
            .rows(5)
            .columns(MAX_DIMENSION + 1)
            .trials(1000)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidColumnCount(_))));
    }

    #[test]
    fn test_config_invalid_zero_trials() {
        let result = SimulationConfig::builder()
            .rows(5)
            .columns(5)
            .trials(0)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_trials() {
        let result = SimulationConfig::builder()
            .rows(5)
            .columns(5)
            .trials(MAX_TRIALS + 1)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(_))));
    }

    #[test]
    fn test_config_missing_rows() {
        let result = SimulationConfig::builder().columns(5).trials(1000).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("rows"))
        ));
    }

    #[test]
    fn test_config_missing_trials() {
        let result = SimulationConfig::builder().rows(5).columns(5).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("trials"))
        ));
    }
}
