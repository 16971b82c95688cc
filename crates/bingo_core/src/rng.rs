//! Draw sources for trial simulation.
//!
//! The trial loop needs exactly one capability: a uniform integer over a
//! closed range, independent across calls. That capability is the
//! [`DrawSource`] trait; the concrete engines behind it are interchangeable
//! and selected at construction time via [`EngineKind`], never through
//! runtime type inspection.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every engine is seeded and retains its seed
//! - **Independence**: the default configuration gives each trial its own
//!   private source, so parallel workers never contend
//! - **Static dispatch**: engines are enum variants, not `Box<dyn Trait>`
//!
//! ## Usage Example
//!
//! ```rust
//! use bingo_core::rng::{DrawSource, SeededSource};
//!
//! let mut source = SeededSource::from_seed(42);
//! let value = source.draw(1, 25);
//! assert!((1..=25).contains(&value));
//! ```

use std::sync::{Arc, Mutex};

use rand::rngs::{SmallRng, StdRng};
use rand::{Rng, SeedableRng};

/// Uniform integer draw capability.
///
/// A draw returns a value uniformly distributed over the closed interval
/// `[min, max]`, statistically independent of previous draws.
pub trait DrawSource {
    /// Draws a uniform integer in `[min, max]`.
    fn draw(&mut self, min: u32, max: u32) -> u32;
}

/// Default draw source backed by rand's `StdRng`.
///
/// The same seed always produces the same draw sequence, enabling
/// reproducible simulations.
///
/// # Examples
///
/// ```rust
/// use bingo_core::rng::{DrawSource, SeededSource};
///
/// let mut a = SeededSource::from_seed(7);
/// let mut b = SeededSource::from_seed(7);
/// assert_eq!(a.draw(1, 100), b.draw(1, 100));
/// ```
pub struct SeededSource {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (retained for reproducibility
    /// tracking).
    seed: u64,
}

impl SeededSource {
    /// Creates a source initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DrawSource for SeededSource {
    #[inline]
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        self.inner.gen_range(min..=max)
    }
}

/// Throughput-oriented draw source backed by rand's `SmallRng`.
///
/// Weaker statistical guarantees than [`SeededSource`] but noticeably faster
/// per draw; the simulation outcome distribution is unaffected for the board
/// sizes this crate targets.
pub struct FastSource {
    inner: SmallRng,
    seed: u64,
}

impl FastSource {
    /// Creates a source initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DrawSource for FastSource {
    #[inline]
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        self.inner.gen_range(min..=max)
    }
}

/// Draw-source engine selection.
///
/// Selected once at configuration time; [`EngineKind::source`] constructs the
/// matching engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// rand `StdRng` (default).
    #[default]
    Standard,
    /// rand `SmallRng`, higher throughput.
    Fast,
}

impl EngineKind {
    /// Constructs the selected engine seeded with `seed`.
    pub fn source(self, seed: u64) -> EngineSource {
        match self {
            EngineKind::Standard => EngineSource::Standard(SeededSource::from_seed(seed)),
            EngineKind::Fast => EngineSource::Fast(FastSource::from_seed(seed)),
        }
    }
}

/// A draw source constructed from an [`EngineKind`].
pub enum EngineSource {
    /// `StdRng`-backed engine.
    Standard(SeededSource),
    /// `SmallRng`-backed engine.
    Fast(FastSource),
}

impl DrawSource for EngineSource {
    #[inline]
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        match self {
            EngineSource::Standard(source) => source.draw(min, max),
            EngineSource::Fast(source) => source.draw(min, max),
        }
    }
}

/// One engine shared by all trials behind explicit mutual exclusion.
///
/// Opt-in configuration: every draw takes the lock, so parallel trials
/// serialise on it. Handles are cheap to clone; all clones draw from the same
/// underlying engine.
#[derive(Clone)]
pub struct SharedSource {
    inner: Arc<Mutex<EngineSource>>,
}

impl SharedSource {
    /// Wraps an engine in a shared, lockable handle.
    pub fn new(engine: EngineSource) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }
}

impl DrawSource for SharedSource {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        self.inner
            .lock()
            .expect("shared draw source mutex poisoned")
            .draw(min, max)
    }
}

/// Scripted draw source replaying a fixed sequence.
///
/// Intended for deterministic tests: the requested range is ignored and the
/// next scripted value is returned verbatim.
///
/// # Panics
///
/// `draw` panics when the script is exhausted.
pub struct ReplaySource {
    values: Vec<u32>,
    next: usize,
}

impl ReplaySource {
    /// Creates a source that replays `values` in order.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, next: 0 }
    }

    /// Returns how many scripted values remain.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.next
    }
}

impl DrawSource for ReplaySource {
    fn draw(&mut self, _min: u32, _max: u32) -> u32 {
        let value = self.values[self.next];
        self.next += 1;
        value
    }
}
