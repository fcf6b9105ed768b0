//! # Cycle Statistics
//!
//! Per-recompute counters for the slice pipeline and a small rolling monitor
//! of recent cycle times. Useful for checking how aggressively the
//! threshold and density limit are cutting the brushed set.
//!
//! ## Usage
//!
//! ```rust
//! use sliceview::stats::{CycleStats, StatsMonitor};
//!
//! let mut monitor = StatsMonitor::new();
//! monitor.record(&CycleStats::default());
//! assert_eq!(monitor.cycle_count(), 1);
//! ```

use std::collections::VecDeque;
use std::time::Duration;

/// Particle counts after each pipeline stage, plus wall time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CycleStats {
    /// Particles in the dataset
    pub input: usize,
    /// Particles inside the brushed slab
    pub brushed: usize,
    /// Particles at or above the concentration threshold
    pub thresholded: usize,
    /// Particles kept by the density limit, one glyph each
    pub rendered: usize,
    /// Time spent computing the frame
    pub elapsed: Duration,
}

impl CycleStats {
    /// Whether the density limit dropped anything
    pub fn was_truncated(&self) -> bool {
        self.rendered < self.thresholded
    }
}

/// Rolling summary of recent cycles
pub struct StatsMonitor {
    /// Ring buffer of recent cycle times for averaging
    cycle_times: VecDeque<Duration>,
    /// Maximum number of cycle times to keep
    max_samples: usize,
    /// Total cycles recorded
    cycles: u64,
    /// Cycles where the density limit kicked in
    truncated_cycles: u64,
    last: Option<CycleStats>,
}

impl StatsMonitor {
    /// Create a monitor keeping the last 120 cycle times
    pub fn new() -> Self {
        Self::with_capacity(120)
    }

    pub fn with_capacity(max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            cycle_times: VecDeque::with_capacity(max_samples),
            max_samples,
            cycles: 0,
            truncated_cycles: 0,
            last: None,
        }
    }

    /// Record one finished cycle
    pub fn record(&mut self, stats: &CycleStats) {
        if self.cycle_times.len() == self.max_samples {
            self.cycle_times.pop_front();
        }
        self.cycle_times.push_back(stats.elapsed);
        self.cycles += 1;
        if stats.was_truncated() {
            self.truncated_cycles += 1;
        }
        self.last = Some(*stats);
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycles
    }

    pub fn truncated_count(&self) -> u64 {
        self.truncated_cycles
    }

    pub fn last(&self) -> Option<&CycleStats> {
        self.last.as_ref()
    }

    /// Mean of the retained cycle times
    pub fn average_cycle_time(&self) -> Duration {
        if self.cycle_times.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.cycle_times.iter().sum();
        total / self.cycle_times.len() as u32
    }

    /// Slowest retained cycle
    pub fn max_cycle_time(&self) -> Duration {
        self.cycle_times.iter().copied().max().unwrap_or(Duration::ZERO)
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.cycle_times.clear();
        self.cycles = 0;
        self.truncated_cycles = 0;
        self.last = None;
    }
}

impl Default for StatsMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(ms: u64, thresholded: usize, rendered: usize) -> CycleStats {
        CycleStats {
            input: 100,
            brushed: 50,
            thresholded,
            rendered,
            elapsed: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_average_and_window() {
        let mut monitor = StatsMonitor::with_capacity(2);
        monitor.record(&cycle(10, 5, 5));
        monitor.record(&cycle(20, 5, 5));
        monitor.record(&cycle(40, 5, 5));

        assert_eq!(monitor.cycle_count(), 3);
        assert_eq!(monitor.average_cycle_time(), Duration::from_millis(30));
        assert_eq!(monitor.max_cycle_time(), Duration::from_millis(40));
    }

    #[test]
    fn test_truncation_counted() {
        let mut monitor = StatsMonitor::new();
        monitor.record(&cycle(1, 10, 10));
        monitor.record(&cycle(1, 3000, 2000));

        assert_eq!(monitor.truncated_count(), 1);
        assert!(monitor.last().unwrap().was_truncated());

        monitor.reset();
        assert_eq!(monitor.cycle_count(), 0);
        assert_eq!(monitor.average_cycle_time(), Duration::ZERO);
    }
}
