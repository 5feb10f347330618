//! Row predicates shared by the filter and search engines.

use crate::tabular::table::Table;

/// A predicate over one row of a table.
///
/// Needles are stored lowercased; matching lowercases the rendered cell and
/// tests substring containment. Null cells never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Always true
    True,

    /// The named column contains the needle
    Contains {
        column: String,
        needle: String,
    },

    /// At least one column contains the needle
    AnyContains {
        needle: String,
    },

    /// Logical AND of predicates
    And(Vec<Predicate>),
}

impl Predicate {
    /// Create a single-column containment predicate.
    pub fn contains(column: &str, needle: &str) -> Self {
        Predicate::Contains {
            column: column.to_string(),
            needle: needle.to_lowercase(),
        }
    }

    /// Create an any-column containment predicate.
    pub fn any_contains(needle: &str) -> Self {
        Predicate::AnyContains {
            needle: needle.to_lowercase(),
        }
    }

    /// Evaluate the predicate for a row.
    ///
    /// A `Contains` on a column the table does not have is false; callers
    /// that want unknown columns ignored drop those predicates up front.
    pub fn evaluate(&self, table: &Table, row_index: usize) -> bool {
        match self {
            Predicate::True => true,
            Predicate::Contains { column, needle } => table
                .value(row_index, column)
                .map_or(false, |value| value.contains_lowercase(needle)),
            Predicate::AnyContains { needle } => table
                .columns()
                .iter()
                .filter_map(|column| column.get(row_index))
                .any(|value| value.contains_lowercase(needle)),
            Predicate::And(predicates) => predicates
                .iter()
                .all(|predicate| predicate.evaluate(table, row_index)),
        }
    }
}
