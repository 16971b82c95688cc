//! Error types for batch execution and aggregation.

use thiserror::Error;

/// Errors surfaced by the executor and the statistics aggregator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The population result set holds no trials.
    #[error("population result set is empty")]
    EmptyResultSet,

    /// A rank beyond the board's line count was requested.
    #[error("rank {rank} out of range: board has {lines} lines")]
    RankOutOfRange {
        /// Requested 0-based rank.
        rank: usize,
        /// Number of lines on the board.
        lines: usize,
    },

    /// A reveal position beyond the board's cell count was requested.
    #[error("reveal {reveal} out of range: board has {cells} cells")]
    RevealOutOfRange {
        /// Requested 0-based reveal position.
        reveal: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// Per-cell statistics were requested from a population simulated
    /// without cell tracking.
    #[error("trial {index} carries no per-cell events: cell tracking was disabled")]
    CellTrackingDisabled {
        /// Index of the first trial found without cell events.
        index: usize,
    },

    /// A trial produced the wrong number of completion events.
    ///
    /// The trial loop guarantees exactly one event per line; seeing anything
    /// else is a defect, not a recoverable runtime condition.
    #[error("trial {index} recorded {events} completion events, expected {expected}")]
    MalformedTrial {
        /// Index of the offending trial within the batch.
        index: usize,
        /// Number of events recorded.
        events: usize,
        /// Number of events expected (lines on the board).
        expected: usize,
    },
}
