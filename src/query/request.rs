//! Query requests and their query-string form.

use crate::error::{Error, Result};
use crate::query::filter::Filters;
use crate::query::DEFAULT_LIMIT;

/// Query-string key holding the row limit.
pub const LIMIT_KEY: &str = "limit";

/// Query-string key holding the search term.
pub const SEARCH_KEY: &str = "search";

/// A single query against a named table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Registered table name
    pub table_name: String,

    /// Column filters, in the order given
    pub filters: Filters,

    /// Free-text search term
    pub search: Option<String>,

    /// Maximum number of rows; negative behaves as zero
    pub limit: i64,
}

impl QueryRequest {
    /// Create a request with no filters, no search and the default limit.
    pub fn new(table_name: &str) -> Self {
        QueryRequest {
            table_name: table_name.to_string(),
            filters: Filters::new(),
            search: None,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Add a column filter.
    pub fn with_filter(mut self, column: &str, value: &str) -> Self {
        self.filters.insert(column, value);
        self
    }

    /// Set the search term. An empty term clears it.
    pub fn with_search(mut self, term: &str) -> Self {
        self.search = if term.is_empty() { None } else { Some(term.to_string()) };
        self
    }

    /// Set the row limit.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Build a request from decoded query-string pairs.
    ///
    /// `limit` and `search` are reserved; every other key becomes a column
    /// filter. A missing `limit` falls back to `default_limit`.
    pub fn from_query_pairs<I, K, V>(table_name: &str, pairs: I, default_limit: i64) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = QueryRequest::new(table_name).with_limit(default_limit);

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                LIMIT_KEY => {
                    request.limit = value.trim().parse::<i64>().map_err(|_| {
                        Error::InvalidArgument(format!("limit must be an integer, got {:?}", value))
                    })?;
                }
                SEARCH_KEY => request = request.with_search(value),
                column => request.filters.insert(column, value),
            }
        }

        Ok(request)
    }
}
