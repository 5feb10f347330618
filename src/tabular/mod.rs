//! In-memory tables and the registry that names them.

pub mod value;
pub mod schema;
pub mod column;
pub mod table;
pub mod registry;

pub use value::Value;
pub use schema::{Schema, Field, DataType};
pub use column::{Column, ColumnBuilder, ColumnIterator};
pub use table::{Table, TableBuilder, Record};
pub use registry::{TableRegistry, TableNames};
