//! Validation statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters maintained by a [`Validator`](crate::Validator).
///
/// All fields are atomic so a validator can be shared by reference (and
/// across threads) while still counting its work.
///
/// # Memory Ordering
/// `Ordering::Relaxed` everywhere: the counters are independent and only
/// need atomicity, not ordering relative to each other.
///
/// # Example
/// ```
/// use btreecheck::ValidationStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = ValidationStats::new();
/// stats.nodes_visited.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.snapshot().nodes_visited, 1);
/// ```
#[derive(Debug)]
pub struct ValidationStats {
    /// Number of trees (or detached nodes) passed to the validator.
    pub trees_checked: AtomicU64,

    /// Number of nodes the validator entered.
    pub nodes_visited: AtomicU64,

    /// Number of key-against-key ordering comparisons performed.
    pub keys_compared: AtomicU64,

    /// Number of checks that ended with an ordering violation.
    pub violations_found: AtomicU64,
}

impl ValidationStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            trees_checked: AtomicU64::new(0),
            nodes_visited: AtomicU64::new(0),
            keys_compared: AtomicU64::new(0),
            violations_found: AtomicU64::new(0),
        }
    }

    /// Fraction of checked trees that were invalid (0.0 to 1.0).
    pub fn violation_rate(&self) -> f64 {
        self.snapshot().violation_rate()
    }

    /// Get a non-atomic copy of the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            trees_checked: self.trees_checked.load(Ordering::Relaxed),
            nodes_visited: self.nodes_visited.load(Ordering::Relaxed),
            keys_compared: self.keys_compared.load(Ordering::Relaxed),
            violations_found: self.violations_found.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.trees_checked.store(0, Ordering::Relaxed);
        self.nodes_visited.store(0, Ordering::Relaxed);
        self.keys_compared.store(0, Ordering::Relaxed);
        self.violations_found.store(0, Ordering::Relaxed);
    }
}

impl Default for ValidationStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time copy of [`ValidationStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub trees_checked: u64,
    pub nodes_visited: u64,
    pub keys_compared: u64,
    pub violations_found: u64,
}

impl StatsSnapshot {
    /// Fraction of checked trees that were invalid (0.0 to 1.0).
    pub fn violation_rate(&self) -> f64 {
        if self.trees_checked == 0 {
            0.0
        } else {
            self.violations_found as f64 / self.trees_checked as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ trees: {}, nodes: {}, comparisons: {}, violations: {} ({:.2}%) }}",
            self.trees_checked,
            self.nodes_visited,
            self.keys_compared,
            self.violations_found,
            self.violation_rate() * 100.0
        )
    }
}
