//! Parallel trial executor.
//!
//! Runs `M` independent trials as an embarrassingly parallel map over trial
//! indices. Each trial gets a private draw source seeded by mixing the base
//! seed with the trial index, so the result multiset is reproducible under
//! any thread scheduling. Rayon's parallel `collect` serves as the
//! concurrency-safe accumulator: per-worker buffers merged post-hoc, with a
//! complete, duplicate-free final enumeration.

use rayon::prelude::*;

use bingo_core::board::Geometry;
use bingo_core::rng::SharedSource;
use bingo_core::trial::{run_trial, TrialResult};
use bingo_core::SimulationConfig;

use crate::error::EngineError;

/// The population result set: one [`TrialResult`] per independent trial.
///
/// Order carries no meaning; every downstream reduction treats the
/// collection as an unordered multiset. Owned by the executor until handed
/// to the aggregator.
#[derive(Clone, Debug)]
pub struct ResultSet {
    geometry: Geometry,
    trials: Vec<TrialResult>,
}

impl ResultSet {
    /// Assembles a result set from trial outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedTrial`] if any trial's event count
    /// does not match the geometry's line count.
    pub fn new(geometry: Geometry, trials: Vec<TrialResult>) -> Result<Self, EngineError> {
        let expected = geometry.line_count() as usize;
        let expected_cells = geometry.cell_count() as usize;
        for (index, trial) in trials.iter().enumerate() {
            let events = trial.line_events().len();
            if events != expected {
                return Err(EngineError::MalformedTrial {
                    index,
                    events,
                    expected,
                });
            }
            // When tracked, cell events must cover the whole board.
            if let Some(cells) = trial.cell_events() {
                if cells.len() != expected_cells {
                    return Err(EngineError::MalformedTrial {
                        index,
                        events: cells.len(),
                        expected: expected_cells,
                    });
                }
            }
        }
        Ok(Self { geometry, trials })
    }

    /// Returns the board geometry the population was simulated on.
    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of trials in the population.
    #[inline]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Returns whether the population is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// The trial outcomes.
    #[inline]
    pub fn trials(&self) -> &[TrialResult] {
        &self.trials
    }

    /// Draw indices at completion rank `rank` across the population.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RankOutOfRange`] if `rank` is not below the
    /// line count.
    pub fn draws_at_rank(&self, rank: usize) -> Result<Vec<u64>, EngineError> {
        let lines = self.geometry.line_count() as usize;
        if rank >= lines {
            return Err(EngineError::RankOutOfRange { rank, lines });
        }
        Ok(self
            .trials
            .iter()
            .map(|t| t.line_events()[rank].draw_index)
            .collect())
    }

    /// Draw indices at reveal position `reveal` (0 = first cell revealed)
    /// across the population.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RevealOutOfRange`] if `reveal` is not below
    /// the cell count, and [`EngineError::CellTrackingDisabled`] if the
    /// population was simulated without per-cell tracking.
    pub fn draws_at_reveal(&self, reveal: usize) -> Result<Vec<u64>, EngineError> {
        let cells = self.geometry.cell_count() as usize;
        if reveal >= cells {
            return Err(EngineError::RevealOutOfRange { reveal, cells });
        }
        self.trials
            .iter()
            .enumerate()
            .map(|(index, t)| {
                t.cell_events()
                    .map(|events| events[reveal].draw_index)
                    .ok_or(EngineError::CellTrackingDisabled { index })
            })
            .collect()
    }
}

/// Mixes the base seed with a trial index into an independent per-trial seed.
///
/// SplitMix64 finaliser; consecutive indices land far apart in seed space.
fn derive_seed(base: u64, index: u64) -> u64 {
    let mut z = base ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Runs the configured batch of independent trials in parallel.
///
/// With per-trial sources (the default) the batch is reproducible: the same
/// configuration and seed yield the same result multiset regardless of how
/// rayon schedules the workers. The shared-source configuration draws from
/// one mutex-guarded engine instead, which serialises draws and makes the
/// outcome scheduling-dependent.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTrial`] if a trial violates the
/// one-event-per-line invariant.
pub fn run_batch(config: &SimulationConfig) -> Result<ResultSet, EngineError> {
    let geometry = config.geometry();
    let trials = config.trials();
    let track_cells = config.track_cells();
    let base_seed = config.seed().unwrap_or(0);

    let results: Vec<TrialResult> = if config.shared_source() {
        let shared = SharedSource::new(config.engine().source(base_seed));
        (0..trials)
            .into_par_iter()
            .map_with(shared, |source, _| run_trial(geometry, source, track_cells))
            .collect()
    } else {
        (0..trials)
            .into_par_iter()
            .map(|index| {
                let mut source = config
                    .engine()
                    .source(derive_seed(base_seed, index as u64));
                run_trial(geometry, &mut source, track_cells)
            })
            .collect()
    };

    ResultSet::new(geometry, results)
}
