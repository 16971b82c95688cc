//! Phase timing instrumentation.
//!
//! Named checkpoints over a monotonic clock; the report logs the time spent
//! between consecutive checkpoints and the total elapsed time.

use std::time::Instant;

use tracing::info;

/// Records named checkpoints against a start instant.
pub struct Stopwatch {
    start: Instant,
    checkpoints: Vec<(&'static str, Instant)>,
}

impl Stopwatch {
    /// Starts a stopwatch at the current instant.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
            checkpoints: Vec::new(),
        }
    }

    /// Records a named checkpoint.
    pub fn checkpoint(&mut self, label: &'static str) {
        self.checkpoints.push((label, Instant::now()));
    }

    /// Logs per-phase and total elapsed times.
    pub fn report(&self) {
        let mut previous = self.start;
        for &(label, at) in &self.checkpoints {
            info!(
                "{}: {:.3} ms",
                label,
                at.duration_since(previous).as_secs_f64() * 1e3
            );
            previous = at;
        }
        info!(
            "total: {:.3} ms",
            previous.duration_since(self.start).as_secs_f64() * 1e3
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoints_are_monotonic() {
        let mut watch = Stopwatch::start();
        watch.checkpoint("first");
        watch.checkpoint("second");

        assert_eq!(watch.checkpoints.len(), 2);
        assert!(watch.checkpoints[0].1 <= watch.checkpoints[1].1);
        assert!(watch.start <= watch.checkpoints[0].1);
    }
}
