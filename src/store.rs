//! The store: the entry point the HTTP layer talks to.
//!
//! ```
//! use sheetbase::{Filters, Store, TableBuilder};
//!
//! # fn main() -> sheetbase::Result<()> {
//! let store = Store::default();
//!
//! let mut builder = TableBuilder::new("employees", ["name", "dept"])?;
//! builder.add_row(["Ann", "Eng"])?;
//! builder.add_row(["Ben", "Sales"])?;
//! builder.add_row(["Cara", "eng"])?;
//! store.register_table("employees", builder.build()?);
//!
//! let rows = store.query_table("employees", &Filters::new().with("dept", "eng"), None, 10)?;
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0]["name"], "Ann");
//! assert_eq!(rows[1]["name"], "Cara");
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::ingest::{self, TableSource};
use crate::query::{engine, Filters, QueryRequest};
use crate::tabular::{Record, Table, TableNames, TableRegistry};
use crate::utils::metrics::{measure, Operation, QueryMetrics, StoreStats};

/// Owns the table registry and runs queries against it.
pub struct Store {
    /// Store configuration
    config: Config,

    /// Registered tables
    registry: TableRegistry,

    /// Activity counters
    metrics: QueryMetrics,
}

impl Default for Store {
    fn default() -> Self {
        Store::new(Config::default())
    }
}

impl Store {
    /// Create an empty store.
    pub fn new(config: Config) -> Self {
        Store {
            config,
            registry: TableRegistry::new(),
            metrics: QueryMetrics::new(),
        }
    }

    /// Get the store configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a table, replacing any table already using `name`.
    pub fn register_table(&self, name: &str, table: Table) {
        self.registry.register(name, table);
        self.metrics.record(Operation::Register, Duration::ZERO);
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Result<Arc<Table>> {
        self.registry.lookup(name).map_err(|err| {
            if err.is_not_found() {
                self.metrics.record(Operation::NotFound, Duration::ZERO);
                tracing::warn!(table = name, "query for unknown table");
            }
            err
        })
    }

    /// Query a table by name.
    ///
    /// Fails only with [`Error::NotFound`] when no table is registered under
    /// `name`.
    pub fn query_table(
        &self,
        name: &str,
        filters: &Filters,
        search: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Record>> {
        let table = self.table(name)?;

        let (records, elapsed) = measure(|| engine::run(&table, filters, search, limit));
        self.metrics.record(
            Operation::Query {
                scanned: table.row_count(),
                returned: records.len(),
            },
            elapsed,
        );

        tracing::debug!(
            table = name,
            filters = filters.len(),
            search = search.unwrap_or(""),
            limit,
            returned = records.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "query"
        );
        Ok(records)
    }

    /// Run a parsed query request.
    pub fn query(&self, request: &QueryRequest) -> Result<Vec<Record>> {
        self.query_table(
            &request.table_name,
            &request.filters,
            request.search.as_deref(),
            request.limit,
        )
    }

    /// Run a parsed query request and encode the rows as a JSON array.
    pub fn query_json(&self, request: &QueryRequest) -> Result<String> {
        let records = self.query(request)?;
        Ok(serde_json::to_string(&records)?)
    }

    /// Parse an upload with `source` and register it under the key derived
    /// from `filename`. Returns that key.
    pub fn ingest(&self, filename: &str, bytes: &[u8], source: &dyn TableSource) -> Result<String> {
        let key = ingest::table_key(filename);
        let table = source.load(&key, bytes)?;
        self.register_table(&key, table);
        Ok(key)
    }

    /// Read a file from disk, picking the loader from its extension.
    pub fn ingest_path(&self, path: &Path) -> Result<String> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidArgument(format!("no file name in {}", path.display())))?;

        let source = ingest::source_for(filename, self.config.csv_delimiter).ok_or_else(|| {
            Error::InvalidArgument(format!("unsupported file type: {}", filename))
        })?;

        let bytes = std::fs::read(path)?;
        self.ingest(filename, &bytes, source.as_ref())
    }

    /// Names of the registered tables, in registration order.
    pub fn tables(&self) -> TableNames {
        self.registry.list()
    }

    /// Get a snapshot of the store's counters.
    pub fn stats(&self) -> StoreStats {
        self.metrics.snapshot()
    }
}
