//! Registry of named tables.
//!
//! Registration replaces the entry for a name in one step under the write
//! lock. Lookups hold the read lock only long enough to clone the `Arc`, so a
//! caller always sees either the previous table or the new one in full.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::tabular::table::Table;

#[derive(Default)]
struct Inner {
    /// Table name to table
    tables: HashMap<String, Arc<Table>>,

    /// Names in first-registration order
    order: Vec<String>,
}

/// Process-wide mapping from table name to table.
#[derive(Default)]
pub struct TableRegistry {
    inner: RwLock<Inner>,
}

impl TableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table under `name`, replacing any previous table.
    ///
    /// The registry key is the table's name: a table built under another
    /// name is renamed to `name`. Returns the table that was replaced, if any.
    pub fn register(&self, name: &str, table: Table) -> Option<Arc<Table>> {
        let table = if table.name() == name {
            table
        } else {
            table.with_name(name)
        };
        let table = Arc::new(table);
        let (rows, columns) = (table.row_count(), table.schema().field_count());

        let mut inner = self.inner.write();
        let previous = inner.tables.insert(name.to_string(), table);
        if previous.is_none() {
            inner.order.push(name.to_string());
        }
        drop(inner);

        tracing::info!(
            table = name,
            rows,
            columns,
            replaced = previous.is_some(),
            "registered table"
        );
        previous
    }

    /// Look up a table by name.
    pub fn lookup(&self, name: &str) -> Result<Arc<Table>> {
        self.inner
            .read()
            .tables
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Check if a table is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().tables.contains_key(name)
    }

    /// Iterate over the registered names in registration order.
    ///
    /// The iterator works on a snapshot and does not hold the lock.
    pub fn list(&self) -> TableNames {
        TableNames {
            names: self.inner.read().order.clone().into_iter(),
        }
    }

    /// Get the number of registered tables.
    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    /// Check if no table is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Iterator over registered table names, produced by [`TableRegistry::list`].
pub struct TableNames {
    names: std::vec::IntoIter<String>,
}

impl Iterator for TableNames {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.names.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl ExactSizeIterator for TableNames {}
