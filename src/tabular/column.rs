//! Column storage for in-memory tables.

use crate::tabular::schema::{DataType, Field};
use crate::tabular::value::Value;

/// A single column: its field definition and its values in row order.
#[derive(Debug, Clone)]
pub struct Column {
    /// Field definition
    field: Field,

    /// Values, one per row
    values: Vec<Value>,
}

impl Column {
    /// Get the field definition.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Get the column name.
    pub fn name(&self) -> &str {
        &self.field.name
    }

    /// Get the number of rows in the column.
    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    /// Get the value at a row, or `None` if the row is out of range.
    #[inline]
    pub fn get(&self, row_index: usize) -> Option<&Value> {
        self.values.get(row_index)
    }

    /// Check if the value at a row is null. Out-of-range rows count as null.
    pub fn is_null(&self, row_index: usize) -> bool {
        self.values.get(row_index).map_or(true, Value::is_null)
    }

    /// Iterate over the values in row order.
    pub fn iter(&self) -> ColumnIterator<'_> {
        ColumnIterator {
            column: self,
            position: 0,
        }
    }
}

/// Iterator over the values of a column.
pub struct ColumnIterator<'a> {
    column: &'a Column,
    position: usize,
}

impl<'a> Iterator for ColumnIterator<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.column.values.get(self.position)?;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.column.values.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ColumnIterator<'_> {}

/// Builder that accumulates values for one column and infers its type.
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    /// Column name
    name: String,

    /// Values appended so far
    values: Vec<Value>,

    /// Type covering every appended value
    data_type: DataType,

    /// Whether a null has been appended
    nullable: bool,
}

impl ColumnBuilder {
    /// Create a new column builder.
    pub fn new(name: &str) -> Self {
        ColumnBuilder {
            name: name.to_string(),
            values: Vec::new(),
            data_type: DataType::Null,
            nullable: false,
        }
    }

    /// Get the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a value.
    pub fn append(&mut self, value: Value) {
        if value.is_null() {
            self.nullable = true;
        }
        self.data_type = self.data_type.merge(DataType::of(&value));
        self.values.push(value);
    }

    /// Get the number of values appended so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no values have been appended.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Finish the column.
    pub fn finish(self) -> Column {
        Column {
            field: Field::new(&self.name, self.data_type, self.nullable),
            values: self.values,
        }
    }
}
