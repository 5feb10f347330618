//! Column filters.
//!
//! Filters arrive schema-less from the query string, so a filter naming a
//! column the table does not have is skipped rather than rejected.

use crate::query::predicate::Predicate;
use crate::query::RowSet;
use crate::tabular::table::Table;

/// Ordered mapping from column name to match string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, String)>,
}

impl Filters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match string for a column.
    ///
    /// Setting a column again replaces its value but keeps its position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    /// Builder-style [`Filters::insert`].
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    /// Iterate over the filters in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Get the number of filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no filters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combine the filters that apply to `table` into one predicate.
    pub fn to_predicate(&self, table: &Table) -> Predicate {
        let predicates: Vec<Predicate> = self
            .iter()
            .filter(|(column, _)| {
                let known = table.has_column(column);
                if !known {
                    tracing::trace!(table = table.name(), column, "skipping filter on unknown column");
                }
                known
            })
            .map(|(column, value)| Predicate::contains(column, value))
            .collect();

        if predicates.is_empty() {
            Predicate::True
        } else {
            Predicate::And(predicates)
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Filters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Filters::new();
        for (column, value) in iter {
            filters.insert(column, value);
        }
        filters
    }
}

/// Apply `filters` to every row of `table`.
///
/// A row survives when its value in every known filter column contains the
/// match string, ignoring case. Row order is kept.
pub fn apply(table: &Table, filters: &Filters) -> RowSet {
    let predicate = filters.to_predicate(table);
    if predicate == Predicate::True {
        return (0..table.row_count()).collect();
    }

    (0..table.row_count())
        .filter(|&row| predicate.evaluate(table, row))
        .collect()
}
