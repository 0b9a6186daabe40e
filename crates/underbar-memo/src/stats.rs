//! Memo statistics tracking

use std::cell::Cell;

/// Hit/miss counters for one wrapper
///
/// Wrappers are single-threaded, so plain `Cell` counters are enough.
#[derive(Debug, Default)]
pub struct MemoStats {
    hits: Cell<u64>,
    misses: Cell<u64>,
    inserts: Cell<u64>,
    failures: Cell<u64>,
}

impl MemoStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup answered from the cache
    pub fn record_hit(&self) {
        bump(&self.hits);
    }

    /// Record a lookup that had to call the wrapped function
    pub fn record_miss(&self) {
        bump(&self.misses);
    }

    /// Record a stored result
    pub fn record_insert(&self) {
        bump(&self.inserts);
    }

    /// Record a wrapped function returning an error
    pub fn record_failure(&self) {
        bump(&self.failures);
    }

    /// Get total hits
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    /// Get total misses
    pub fn misses(&self) -> u64 {
        self.misses.get()
    }

    /// Get total inserts
    pub fn inserts(&self) -> u64 {
        self.inserts.get()
    }

    /// Get total failures
    pub fn failures(&self) -> u64 {
        self.failures.get()
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Reset all statistics
    pub fn reset(&self) {
        self.hits.set(0);
        self.misses.set(0);
        self.inserts.set(0);
        self.failures.set(0);
    }
}

fn bump(counter: &Cell<u64>) {
    counter.set(counter.get().saturating_add(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let stats = MemoStats::new();

        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_failure();

        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 1);
        assert_eq!(stats.failures(), 1);
        assert_eq!(stats.hit_ratio(), 2.0 / 3.0);
    }

    #[test]
    fn test_stats_empty_ratio() {
        let stats = MemoStats::new();
        assert_eq!(stats.hit_ratio(), 0.0);
    }

    #[test]
    fn test_stats_reset() {
        let stats = MemoStats::new();

        stats.record_hit();
        stats.record_miss();
        stats.record_insert();
        stats.reset();

        assert_eq!(stats.hits(), 0);
        assert_eq!(stats.misses(), 0);
        assert_eq!(stats.inserts(), 0);
        assert_eq!(stats.hit_ratio(), 0.0);
    }
}
