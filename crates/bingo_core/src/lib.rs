//! # bingo_core: Board and Trial Foundation
//!
//! Foundation layer of the bingo-mc workspace. It models an R×C numbered
//! board whose cells are revealed one draw at a time, and simulates a single
//! game to completion, recording when each of the R+C lines (rows and
//! columns) first fills.
//!
//! ## Layering
//!
//! This crate has no dependency on the other workspace crates:
//!
//! ```text
//! bingo_cli      (entry point, report output)
//!   └── bingo_engine   (parallel executor, statistics)
//!         └── bingo_core    (this crate)
//! ```
//!
//! ## Components
//!
//! - [`config`]: validated simulation configuration with a builder API
//! - [`rng`]: the [`DrawSource`](rng::DrawSource) capability and its engines
//! - [`board`]: board state, cell reveal tracking and line predicates
//! - [`trial`]: the single-trial simulation loop
//!
//! ## Usage Example
//!
//! ```rust
//! use bingo_core::board::Geometry;
//! use bingo_core::rng::SeededSource;
//! use bingo_core::trial::run_trial;
//!
//! let geometry = Geometry::new(5, 5);
//! let mut source = SeededSource::from_seed(42);
//!
//! let result = run_trial(geometry, &mut source, false);
//! assert_eq!(result.line_events().len(), 10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod board;
pub mod config;
pub mod error;
pub mod rng;
pub mod trial;

pub use config::{SimulationConfig, SimulationConfigBuilder};
pub use error::ConfigError;
