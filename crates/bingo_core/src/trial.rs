//! Single-trial simulation.
//!
//! One trial plays a full game on one board: values are drawn uniformly from
//! `1..=N` until every line is filled, and the draw index at which each line
//! first fills is recorded in completion order. A draw that hits an already
//! revealed value still consumes a draw index (the game rule that repeated
//! numbers cost a turn), it just reveals nothing.
//!
//! Termination is a coupon-collector argument: every draw either reveals one
//! of finitely many cells or is wasted, so all lines fill in finite expected
//! draws.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Geometry};
use crate::rng::DrawSource;

/// One line- or cell-completion moment within a trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// The 1-based draw index at which the completion happened.
    pub draw_index: u64,
    /// Revealed cells across the whole board at that moment.
    pub cells_revealed: u32,
}

/// The outcome of one trial, immutable once produced.
///
/// `line_events` holds exactly R+C events in the order lines completed (not
/// row/column index order), with non-decreasing draw indices; several lines
/// completing on one draw repeat that draw index. When per-cell tracking is
/// enabled, `cell_events` holds exactly N events, one per first reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialResult {
    line_events: Vec<CompletionEvent>,
    cell_events: Option<Vec<CompletionEvent>>,
}

impl TrialResult {
    /// Assembles a trial result from recorded events.
    pub fn new(
        line_events: Vec<CompletionEvent>,
        cell_events: Option<Vec<CompletionEvent>>,
    ) -> Self {
        Self {
            line_events,
            cell_events,
        }
    }

    /// Line-completion events in completion order.
    #[inline]
    pub fn line_events(&self) -> &[CompletionEvent] {
        &self.line_events
    }

    /// Cell-reveal events in reveal order, when tracking was enabled.
    #[inline]
    pub fn cell_events(&self) -> Option<&[CompletionEvent]> {
        self.cell_events.as_deref()
    }
}

/// Runs one trial on a freshly shuffled board.
///
/// The same `source` drives both the board shuffle and the draws, so the
/// whole trial is reproducible from the source's seed.
///
/// # Arguments
///
/// * `geometry` - Board geometry
/// * `source` - Draw source, private to this trial
/// * `track_cells` - Record per-cell fill events alongside per-line events
pub fn run_trial(
    geometry: Geometry,
    source: &mut impl DrawSource,
    track_cells: bool,
) -> TrialResult {
    let mut board = Board::shuffled(geometry, source);
    run_trial_on_board(&mut board, source, track_cells)
}

/// Runs one trial on a prepared board.
///
/// Exposed separately so tests can pin the board arrangement and script the
/// draw sequence.
pub fn run_trial_on_board(
    board: &mut Board,
    source: &mut impl DrawSource,
    track_cells: bool,
) -> TrialResult {
    let geometry = board.geometry();
    let n = geometry.cell_count();
    let lines = geometry.line_count() as usize;

    let mut line_filled = vec![false; lines];
    let mut line_events: Vec<CompletionEvent> = Vec::with_capacity(lines);
    let mut cell_events: Option<Vec<CompletionEvent>> =
        track_cells.then(|| Vec::with_capacity(n as usize));

    let mut draw_index: u64 = 0;
    while line_events.len() < lines {
        draw_index += 1;
        let value = source.draw(1, n);

        // A duplicate draw consumes the index but changes nothing else.
        if !board.reveal(value) {
            continue;
        }

        // Computed once per draw, shared by every line completing on it.
        let cells_revealed = board.revealed_count();

        if let Some(events) = cell_events.as_mut() {
            events.push(CompletionEvent {
                draw_index,
                cells_revealed,
            });
        }

        // Rows before columns, ascending index order within each: line
        // indices are laid out that way, so a forward scan is the tie-break.
        for line in 0..lines {
            if !line_filled[line] && board.line_filled(line) {
                line_filled[line] = true;
                line_events.push(CompletionEvent {
                    draw_index,
                    cells_revealed,
                });
            }
        }
    }

    debug_assert_eq!(line_events.len(), lines);
    debug_assert!(line_events
        .windows(2)
        .all(|pair| pair[0].draw_index <= pair[1].draw_index));

    TrialResult::new(line_events, cell_events)
}
