//! Free-text search across all columns.

use crate::query::predicate::Predicate;
use crate::query::RowSet;
use crate::tabular::table::Table;

/// Keep the rows in which any column contains `term`, ignoring case.
///
/// An absent or empty term returns `rows` unchanged.
pub fn apply(table: &Table, rows: RowSet, term: Option<&str>) -> RowSet {
    let term = match term {
        Some(term) if !term.is_empty() => term,
        _ => return rows,
    };

    let predicate = Predicate::any_contains(term);
    rows.into_iter()
        .filter(|&row| predicate.evaluate(table, row))
        .collect()
}
