//! Memory statistics collection.

use crate::MemoryUsage;
use tracing::debug;

/// Running memory statistics for a tab list.
///
/// The owner passes the recomputed total after every change, so `total`
/// always matches the tabs actually open.
#[derive(Debug, Clone, Default)]
pub struct MemoryStats {
    /// Memory held by open tabs
    total: MemoryUsage,
    /// Peak of `total`
    peak: MemoryUsage,
    /// Tabs ever opened
    opened: usize,
    /// Tabs closed by the user
    closed: usize,
    /// Tabs evicted for their memory
    evicted: usize,
}

impl MemoryStats {
    /// Create new memory stats tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tab being opened, leaving `total` open.
    pub fn record_open(&mut self, total: MemoryUsage) {
        self.opened += 1;
        self.observe(total);
    }

    /// Record a tab being closed, leaving `total` open.
    pub fn record_close(&mut self, total: MemoryUsage) {
        self.closed += 1;
        self.observe(total);
    }

    /// Record a tab being evicted, leaving `total` open.
    pub fn record_eviction(&mut self, total: MemoryUsage) {
        self.evicted += 1;
        self.observe(total);
    }

    fn observe(&mut self, total: MemoryUsage) {
        self.total = total;
        if total > self.peak {
            self.peak = total;
            debug!(peak = total.as_megabytes(), "New memory peak");
        }
    }

    /// Get memory held by open tabs.
    pub fn total(&self) -> MemoryUsage {
        self.total
    }

    /// Get peak memory usage.
    pub fn peak(&self) -> MemoryUsage {
        self.peak
    }

    /// Get the number of tabs ever opened.
    pub fn opened(&self) -> usize {
        self.opened
    }

    /// Get the number of tabs closed.
    pub fn closed(&self) -> usize {
        self.closed
    }

    /// Get the number of tabs evicted.
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    /// Get the number of tabs still open.
    pub fn open(&self) -> usize {
        self.opened - self.closed - self.evicted
    }
}
