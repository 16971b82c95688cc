//! # bingo_engine: Parallel Execution and Statistics
//!
//! Engine layer of the bingo-mc workspace: runs a large batch of independent
//! trials in parallel and reduces the resulting population to per-rank
//! statistics.
//!
//! ## Architecture
//!
//! ```text
//! SimulationConfig
//!   └── executor::run_batch()    rayon fan-out, one private source per trial
//!         └── ResultSet          M trial results, unordered multiset
//!               └── stats::summarise_all()
//!                     └── Vec<RankSummary>   mean / median / mode /
//!                                            distribution / std dev
//! ```
//!
//! Each trial is a pure unit of work depending only on its own draw source;
//! no state is shared between trials unless the opt-in shared-source
//! configuration is selected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod executor;
pub mod stats;

pub use error::EngineError;
pub use executor::{run_batch, ResultSet};
pub use stats::{summarise, summarise_all, summarise_cells, CellSummary, RankSummary};
