//! Query engine: filters, then search, then limit.

use crate::query::filter::{self, Filters};
use crate::query::search;
use crate::query::{RowSet, DEFAULT_LIMIT};
use crate::tabular::table::{Record, Table};

/// Run a query against a table and serialize the matching rows.
///
/// Filters are applied first, then the search term, then the first `limit`
/// rows are kept. A negative limit behaves as zero. The result preserves the
/// table's row order.
pub fn run(table: &Table, filters: &Filters, search: Option<&str>, limit: i64) -> Vec<Record> {
    let rows = select(table, filters, search, limit);
    rows.into_iter()
        .filter_map(|row| table.record(row))
        .collect()
}

/// Same as [`run`], but return row indices instead of serialized rows.
pub fn select(table: &Table, filters: &Filters, search: Option<&str>, limit: i64) -> RowSet {
    let rows = filter::apply(table, filters);
    let mut rows = search::apply(table, rows, search);
    rows.truncate(clamp_limit(limit));
    rows
}

/// Convert a caller-supplied limit into a row count.
#[inline]
pub fn clamp_limit(limit: i64) -> usize {
    if limit <= 0 {
        0
    } else {
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}

/// A query bound to a table.
pub struct Query<'a> {
    /// Table to query
    table: &'a Table,

    /// Column filters
    filters: Filters,

    /// Free-text search term
    search: Option<String>,

    /// Maximum number of rows to return
    limit: i64,
}

impl<'a> Query<'a> {
    /// Create a new query.
    pub fn new(table: &'a Table, filters: Filters, search: Option<String>, limit: i64) -> Self {
        Query {
            table,
            filters,
            search,
            limit,
        }
    }

    /// Get the indices of the matching rows.
    pub fn row_indices(&self) -> RowSet {
        select(self.table, &self.filters, self.search.as_deref(), self.limit)
    }

    /// Execute the query and return the results.
    pub fn execute(&self) -> Vec<Record> {
        run(self.table, &self.filters, self.search.as_deref(), self.limit)
    }
}

/// Builder for creating a query.
pub struct QueryBuilder<'a> {
    /// Table to query
    table: &'a Table,

    /// Column filters
    filters: Filters,

    /// Free-text search term
    search: Option<String>,

    /// Maximum number of rows to return
    limit: i64,
}

impl<'a> QueryBuilder<'a> {
    /// Create a new query builder with no filters and the default limit.
    pub fn new(table: &'a Table) -> Self {
        QueryBuilder {
            table,
            filters: Filters::new(),
            search: None,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Add a column filter.
    pub fn filter(mut self, column: &str, value: &str) -> Self {
        self.filters.insert(column, value);
        self
    }

    /// Replace all column filters.
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Set the free-text search term.
    pub fn search(mut self, term: &str) -> Self {
        self.search = Some(term.to_string());
        self
    }

    /// Set the maximum number of rows to return.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Build the query.
    pub fn build(self) -> Query<'a> {
        Query {
            table: self.table,
            filters: self.filters,
            search: self.search,
            limit: self.limit,
        }
    }
}
