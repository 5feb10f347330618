//! Utilities shared across the store.

pub mod metrics;

pub use metrics::{Operation, QueryMetrics, StoreStats, measure};
