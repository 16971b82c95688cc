//! Check command implementation.
//!
//! Reports the parallel capacity the executor will use and the built-in
//! configuration limits.

use tracing::info;

use bingo_core::config::{MAX_DIMENSION, MAX_TRIALS};

use crate::Result;

/// Run the check command.
pub fn run() -> Result<()> {
    info!("bingo-mc environment check");

    println!("logical CPUs:        {}", num_cpus::get());
    println!("rayon worker threads: {}", rayon::current_num_threads());
    println!("max trials per batch: {}", MAX_TRIALS);
    println!("max board dimension:  {}", MAX_DIMENSION);
    println!("default board:        5×5 (10 lines)");

    Ok(())
}
