//! # Sheetbase
//!
//! `sheetbase` turns uploaded spreadsheets into a small read API. Each upload
//! becomes a named, immutable in-memory table; queries narrow it with
//! schema-less column filters, a free-text search across every column and a
//! row limit.
//!
//! ## Features
//!
//! - Column-oriented tables that keep source column and row order
//! - Case-insensitive substring filters; unknown columns are ignored
//! - Free-text search over the string rendering of every cell
//! - Lock-light registry: lookups clone an `Arc`, registration swaps it
//! - Pluggable loaders for JSON records and delimited text exports
//!
//! ## Example
//!
//! ```
//! use sheetbase::{QueryRequest, Store};
//! use sheetbase::ingest::JsonRecordsSource;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::default();
//! let upload = br#"[{"name": "Ann", "dept": "Eng"}, {"name": "Ben", "dept": "Sales"}]"#;
//!
//! let key = store.ingest("Staff List.json", upload, &JsonRecordsSource)?;
//! assert_eq!(key, "staff-list");
//!
//! let request = QueryRequest::from_query_pairs(&key, [("search", "an")], 10)?;
//! let rows = store.query(&request)?;
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0]["name"], "Ann");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod config;
pub mod logging;
pub mod tabular;
pub mod query;
pub mod ingest;
pub mod store;
pub mod utils;

pub use error::{Error, Result};
pub use config::Config;
pub use tabular::{Record, Table, TableBuilder, TableRegistry, Value};
pub use query::{Filters, QueryBuilder, QueryRequest};
pub use store::Store;
pub use utils::StoreStats;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
