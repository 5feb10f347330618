//! Query engine over registered tables.
//!
//! A query narrows a table with column filters, then with a free-text search,
//! then keeps the first `limit` rows. Evaluation never fails.

pub mod predicate;
pub mod filter;
pub mod search;
pub mod engine;
pub mod request;

/// Indices of selected rows, in table order.
pub type RowSet = Vec<usize>;

/// Row limit used when a request does not name one.
pub const DEFAULT_LIMIT: i64 = 10;

pub use predicate::Predicate;
pub use filter::Filters;
pub use engine::{run, Query, QueryBuilder};
pub use request::QueryRequest;
