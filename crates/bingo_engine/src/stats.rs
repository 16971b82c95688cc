//! Per-rank statistics over the population result set.
//!
//! For a completion rank `r` (0 = first line filled, up to R+C−1 = last),
//! the aggregator reduces the `M` draw indices observed at that rank to
//! mean, median, mode, full value→frequency distribution and population
//! standard deviation, plus the mean cells revealed at that moment. All
//! reductions are pure and order-independent.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::EngineError;
use crate::executor::ResultSet;

/// Aggregated statistics for one completion rank.
#[derive(Clone, Debug, Serialize)]
pub struct RankSummary {
    /// 0-based completion rank.
    pub rank: usize,
    /// Arithmetic mean of draw indices at this rank.
    pub mean_draws: f64,
    /// Median draw index (even populations average the two middle values).
    pub median_draws: f64,
    /// Most frequent draw index; ties resolve to the smallest value.
    pub mode_draws: u64,
    /// Population standard deviation of draw indices (divide by M).
    pub std_dev_draws: f64,
    /// Arithmetic mean of cells revealed at this rank's completion moment.
    pub mean_cells_revealed: f64,
    /// Mean draws per completed line: `mean_draws / (rank + 1)`.
    pub efficiency: f64,
    /// Full draw-index → occurrence-count distribution at this rank.
    pub distribution: BTreeMap<u64, u64>,
}

/// Aggregated statistics for one reveal position, available when the batch
/// was run with cell tracking.
#[derive(Clone, Debug, Serialize)]
pub struct CellSummary {
    /// 0-based reveal position (0 = first cell revealed).
    pub reveal: usize,
    /// Arithmetic mean of draw indices at this reveal.
    pub mean_draws: f64,
    /// Median draw index (even populations average the two middle values).
    pub median_draws: f64,
    /// Population standard deviation of draw indices (divide by M).
    pub std_dev_draws: f64,
}

/// Median of a sorted slice; even lengths average the two middle elements.
fn median_of_sorted(sorted: &[u64]) -> f64 {
    let m = sorted.len();
    let mid = m / 2;
    if m % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}

/// Population standard deviation (sum of squared deviations over M).
fn population_std_dev(values: &[u64], mean: f64) -> f64 {
    let sum_sq: f64 = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum();
    (sum_sq / values.len() as f64).sqrt()
}

/// Most frequent value in the distribution; ties resolve to the smallest
/// value (ascending iteration with strictly-greater replacement).
fn mode_of(distribution: &BTreeMap<u64, u64>) -> u64 {
    let mut best_value = 0;
    let mut best_count = 0;
    for (&value, &count) in distribution {
        if count > best_count {
            best_value = value;
            best_count = count;
        }
    }
    best_value
}

/// Computes the statistics for one completion rank.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResultSet`] for an empty population and
/// [`EngineError::RankOutOfRange`] for a rank at or beyond the line count.
pub fn summarise(results: &ResultSet, rank: usize) -> Result<RankSummary, EngineError> {
    if results.is_empty() {
        return Err(EngineError::EmptyResultSet);
    }

    let draws = results.draws_at_rank(rank)?;
    let m = draws.len() as f64;

    let mean_draws = draws.iter().map(|&d| d as f64).sum::<f64>() / m;

    let mut sorted = draws.clone();
    sorted.sort_unstable();
    let median_draws = median_of_sorted(&sorted);

    let mut distribution: BTreeMap<u64, u64> = BTreeMap::new();
    for &d in &draws {
        *distribution.entry(d).or_insert(0) += 1;
    }
    let mode_draws = mode_of(&distribution);

    let std_dev_draws = population_std_dev(&draws, mean_draws);

    let mean_cells_revealed = results
        .trials()
        .iter()
        .map(|t| f64::from(t.line_events()[rank].cells_revealed))
        .sum::<f64>()
        / m;

    Ok(RankSummary {
        rank,
        mean_draws,
        median_draws,
        mode_draws,
        std_dev_draws,
        mean_cells_revealed,
        efficiency: mean_draws / (rank + 1) as f64,
        distribution,
    })
}

/// Computes the statistics for every completion rank, first to last.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResultSet`] for an empty population.
pub fn summarise_all(results: &ResultSet) -> Result<Vec<RankSummary>, EngineError> {
    (0..results.geometry().line_count() as usize)
        .map(|rank| summarise(results, rank))
        .collect()
}

/// Computes draw-index statistics for every reveal position, first cell to
/// last. Mirrors [`summarise_all`] over cells instead of lines.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResultSet`] for an empty population and
/// [`EngineError::CellTrackingDisabled`] if the batch was run without cell
/// tracking.
pub fn summarise_cells(results: &ResultSet) -> Result<Vec<CellSummary>, EngineError> {
    if results.is_empty() {
        return Err(EngineError::EmptyResultSet);
    }

    (0..results.geometry().cell_count() as usize)
        .map(|reveal| {
            let draws = results.draws_at_reveal(reveal)?;
            let m = draws.len() as f64;

            let mean_draws = draws.iter().map(|&d| d as f64).sum::<f64>() / m;

            let mut sorted = draws.clone();
            sorted.sort_unstable();
            let median_draws = median_of_sorted(&sorted);

            Ok(CellSummary {
                reveal,
                mean_draws,
                median_draws,
                std_dev_draws: population_std_dev(&draws, mean_draws),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bingo_core::board::Geometry;
    use bingo_core::SimulationConfig;

    use crate::executor::run_batch;

    fn small_batch(trials: usize, seed: u64) -> ResultSet {
        let config = SimulationConfig::builder()
            .rows(5)
            .columns(5)
            .trials(trials)
            .seed(seed)
            .build()
            .unwrap();
        run_batch(&config).unwrap()
    }

    #[test]
    fn test_median_odd_population() {
        assert_relative_eq!(median_of_sorted(&[1, 2, 3, 4, 5]), 3.0);
    }

    #[test]
    fn test_median_even_population() {
        assert_relative_eq!(median_of_sorted(&[1, 2, 3, 4]), 2.5);
    }

    #[test]
    fn test_population_std_dev_reference_values() {
        let values = [2, 4, 4, 4, 5, 5, 7, 9];
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64;
        assert_relative_eq!(mean, 5.0);
        assert_relative_eq!(population_std_dev(&values, mean), 2.0);
    }

    #[test]
    fn test_std_dev_of_constant_population_is_zero() {
        assert_relative_eq!(population_std_dev(&[7, 7, 7, 7], 7.0), 0.0);
    }

    #[test]
    fn test_mode_tie_break_smallest_value() {
        let mut distribution = BTreeMap::new();
        distribution.insert(30_u64, 4_u64);
        distribution.insert(12, 4);
        distribution.insert(25, 3);
        assert_eq!(mode_of(&distribution), 12);
    }

    #[test]
    fn test_distribution_counts_sum_to_population_size() {
        let results = small_batch(300, 42);
        for summary in summarise_all(&results).unwrap() {
            let total: u64 = summary.distribution.values().sum();
            assert_eq!(total, 300);
        }
    }

    #[test]
    fn test_summary_internal_consistency() {
        let results = small_batch(200, 7);
        let summary = summarise(&results, 0).unwrap();

        assert_eq!(summary.rank, 0);
        assert_relative_eq!(summary.efficiency, summary.mean_draws);
        assert!(summary.distribution.contains_key(&summary.mode_draws));
        assert!(summary.std_dev_draws >= 0.0);

        // Mean and median sit inside the observed value range.
        let min = *summary.distribution.keys().next().unwrap() as f64;
        let max = *summary.distribution.keys().last().unwrap() as f64;
        assert!(summary.mean_draws >= min && summary.mean_draws <= max);
        assert!(summary.median_draws >= min && summary.median_draws <= max);
    }

    #[test]
    fn test_mean_draws_nondecreasing_across_ranks() {
        // Per trial the rank-r draw index is non-decreasing in r, so the
        // population means must be too.
        let results = small_batch(200, 99);
        let summaries = summarise_all(&results).unwrap();
        assert_eq!(summaries.len(), 10);
        for pair in summaries.windows(2) {
            assert!(pair[0].mean_draws <= pair[1].mean_draws);
            assert!(pair[0].mean_cells_revealed <= pair[1].mean_cells_revealed);
        }
    }

    #[test]
    fn test_efficiency_divides_by_rank_position() {
        let results = small_batch(100, 11);
        let summary = summarise(&results, 4).unwrap();
        assert_relative_eq!(summary.efficiency, summary.mean_draws / 5.0);
    }

    #[test]
    fn test_last_rank_mean_cells_is_full_board() {
        // Every trial reveals all 25 cells by its final completion.
        let results = small_batch(50, 21);
        let summary = summarise(&results, 9).unwrap();
        assert_relative_eq!(summary.mean_cells_revealed, 25.0);
    }

    fn tracked_batch(trials: usize, seed: u64) -> ResultSet {
        let config = SimulationConfig::builder()
            .rows(5)
            .columns(5)
            .trials(trials)
            .seed(seed)
            .track_cells(true)
            .build()
            .unwrap();
        run_batch(&config).unwrap()
    }

    #[test]
    fn test_cell_summaries_cover_every_reveal() {
        let results = tracked_batch(100, 17);
        let summaries = summarise_cells(&results).unwrap();
        assert_eq!(summaries.len(), 25);
        for (reveal, summary) in summaries.iter().enumerate() {
            assert_eq!(summary.reveal, reveal);
            assert!(summary.std_dev_draws >= 0.0);
        }
    }

    #[test]
    fn test_first_reveal_always_takes_one_draw() {
        // The first draw always hits an unrevealed cell.
        let results = tracked_batch(50, 23);
        let first = &summarise_cells(&results).unwrap()[0];
        assert_relative_eq!(first.mean_draws, 1.0);
        assert_relative_eq!(first.median_draws, 1.0);
        assert_relative_eq!(first.std_dev_draws, 0.0);
    }

    #[test]
    fn test_cell_mean_draws_strictly_increasing() {
        // Within one trial draw indices strictly increase per reveal, so the
        // population means must too.
        let results = tracked_batch(100, 31);
        let summaries = summarise_cells(&results).unwrap();
        for pair in summaries.windows(2) {
            assert!(pair[0].mean_draws < pair[1].mean_draws);
        }
    }

    #[test]
    fn test_cell_summaries_require_tracking() {
        let results = small_batch(10, 3);
        assert!(matches!(
            summarise_cells(&results),
            Err(EngineError::CellTrackingDisabled { index: 0 })
        ));
    }

    #[test]
    fn test_cell_summaries_empty_result_set() {
        let results = ResultSet::new(Geometry::new(5, 5), Vec::new()).unwrap();
        assert!(matches!(
            summarise_cells(&results),
            Err(EngineError::EmptyResultSet)
        ));
    }

    #[test]
    fn test_rank_out_of_range() {
        let results = small_batch(10, 1);
        assert!(matches!(
            summarise(&results, 10),
            Err(EngineError::RankOutOfRange { rank: 10, lines: 10 })
        ));
    }

    #[test]
    fn test_empty_result_set() {
        let results = ResultSet::new(Geometry::new(5, 5), Vec::new()).unwrap();
        assert!(matches!(
            summarise(&results, 0),
            Err(EngineError::EmptyResultSet)
        ));
    }
}
