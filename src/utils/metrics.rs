//! Counters for store activity.
//!
//! Each [`Store`](crate::Store) owns one [`QueryMetrics`]; [`StoreStats`] is a
//! point-in-time copy of it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Operation types for metrics tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// A table was registered or replaced.
    Register,

    /// A query ran to completion.
    Query {
        /// Rows in the queried table.
        scanned: usize,

        /// Rows returned to the caller.
        returned: usize,
    },

    /// A lookup named a table that is not registered.
    NotFound,
}

/// Snapshot of store statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Total number of registrations, including replacements.
    pub tables_registered: u64,

    /// Total number of completed queries.
    pub queries: u64,

    /// Total number of lookups for unknown tables.
    pub not_found: u64,

    /// Total rows scanned by queries.
    pub rows_scanned: u64,

    /// Total rows returned by queries.
    pub rows_returned: u64,

    /// Average query time in microseconds.
    pub avg_query_time_us: u64,
}

/// Atomic counters for one store.
#[derive(Debug, Default)]
pub struct QueryMetrics {
    tables_registered: AtomicU64,
    queries: AtomicU64,
    not_found: AtomicU64,
    rows_scanned: AtomicU64,
    rows_returned: AtomicU64,
    total_query_time_us: AtomicU64,
}

impl QueryMetrics {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an operation.
    #[inline]
    pub fn record(&self, op: Operation, duration: Duration) {
        match op {
            Operation::Register => {
                self.tables_registered.fetch_add(1, Ordering::Relaxed);
            },
            Operation::Query { scanned, returned } => {
                self.queries.fetch_add(1, Ordering::Relaxed);
                self.rows_scanned.fetch_add(scanned as u64, Ordering::Relaxed);
                self.rows_returned.fetch_add(returned as u64, Ordering::Relaxed);
                self.total_query_time_us
                    .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
            },
            Operation::NotFound => {
                self.not_found.fetch_add(1, Ordering::Relaxed);
            },
        }
    }

    /// Get the current statistics.
    #[inline]
    pub fn snapshot(&self) -> StoreStats {
        let queries = self.queries.load(Ordering::Relaxed);

        let avg_query_time_us = if queries > 0 {
            self.total_query_time_us.load(Ordering::Relaxed) / queries
        } else {
            0
        };

        StoreStats {
            tables_registered: self.tables_registered.load(Ordering::Relaxed),
            queries,
            not_found: self.not_found.load(Ordering::Relaxed),
            rows_scanned: self.rows_scanned.load(Ordering::Relaxed),
            rows_returned: self.rows_returned.load(Ordering::Relaxed),
            avg_query_time_us,
        }
    }
}

/// Measure how long `f` takes.
#[inline]
pub fn measure<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
