//! Table implementation.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::tabular::column::{Column, ColumnBuilder};
use crate::tabular::schema::Schema;
use crate::tabular::value::Value;

/// A serialized row: column name to JSON scalar, in column order.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// An immutable, column-oriented table.
///
/// Every column holds exactly `row_count` values; missing source values are
/// stored as [`Value::Null`].
#[derive(Debug, Clone)]
pub struct Table {
    /// Table name
    name: String,

    /// Table schema
    schema: Schema,

    /// Columns in source order
    columns: Vec<Column>,

    /// Number of rows in the table
    row_count: usize,
}

impl Table {
    /// Get the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the table schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Get the number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.schema.field_index(name).map(|i| &self.columns[i])
    }

    /// Get all columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get the column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.names().collect()
    }

    /// Check if the table has a column with the given name.
    pub fn has_column(&self, name: &str) -> bool {
        self.schema.contains_field(name)
    }

    /// Get a single cell.
    pub fn value(&self, row_index: usize, column: &str) -> Option<&Value> {
        self.column(column)?.get(row_index)
    }

    /// Iterate over the values of one row, paired with their column names.
    pub fn row(&self, row_index: usize) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.columns
            .iter()
            .filter_map(move |column| column.get(row_index).map(|value| (column.name(), value)))
    }

    /// Return the same table under another name.
    pub fn with_name(mut self, name: &str) -> Table {
        self.name = name.to_string();
        self
    }

    /// Serialize one row. Returns `None` if the row is out of range.
    pub fn record(&self, row_index: usize) -> Option<Record> {
        if row_index >= self.row_count {
            return None;
        }

        let mut record = Record::with_capacity(self.columns.len());
        for (name, value) in self.row(row_index) {
            record.insert(name.to_string(), value.to_json());
        }
        Some(record)
    }
}

/// Builder for creating a table row by row.
pub struct TableBuilder {
    /// Table name
    name: String,

    /// Column builders in source order
    column_builders: Vec<ColumnBuilder>,

    /// Column name to builder index
    column_indices: HashMap<String, usize>,

    /// Number of rows added
    row_count: usize,
}

impl TableBuilder {
    /// Create a new table builder. Column names must be unique.
    pub fn new<I, S>(name: &str, columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut column_indices = HashMap::new();
        let mut column_builders = Vec::new();
        for column in columns {
            let column = column.as_ref();
            if column_indices.insert(column.to_string(), column_builders.len()).is_some() {
                return Err(Error::InvalidArgument(format!(
                    "Duplicate column name: {}",
                    column
                )));
            }
            column_builders.push(ColumnBuilder::new(column));
        }

        Ok(TableBuilder {
            name: name.to_string(),
            column_builders,
            column_indices,
            row_count: 0,
        })
    }

    /// Get the number of rows added so far.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Add a row given one value per column, in column order.
    pub fn add_row<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() != self.column_builders.len() {
            return Err(Error::InvalidArgument(format!(
                "Row {} has {} values, but table {} has {} columns",
                self.row_count,
                values.len(),
                self.name,
                self.column_builders.len()
            )));
        }

        for (builder, value) in self.column_builders.iter_mut().zip(values) {
            builder.append(value);
        }
        self.row_count += 1;

        Ok(())
    }

    /// Add a row given as name/value pairs.
    ///
    /// Columns without a pair get a null; pairs naming an unknown column are
    /// ignored. If a column is named twice the last value wins.
    pub fn add_record<I, K, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut row = vec![Value::Null; self.column_builders.len()];
        for (key, value) in values {
            if let Some(&i) = self.column_indices.get(key.as_ref()) {
                row[i] = value.into();
            }
        }
        self.add_row(row)
    }

    /// Build the table.
    pub fn build(self) -> Result<Table> {
        let columns: Vec<Column> = self
            .column_builders
            .into_iter()
            .map(ColumnBuilder::finish)
            .collect();
        let schema = Schema::new(columns.iter().map(|c| c.field().clone()).collect())?;

        Ok(Table {
            name: self.name,
            schema,
            columns,
            row_count: self.row_count,
        })
    }
}
