//! Schema definition for loaded tables.
//!
//! Column types are inferred from the loaded values. They describe the data
//! for listings and diagnostics; query matching always works on the string
//! rendering of a value.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::tabular::value::Value;

/// Data types a column can be inferred as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Every value in the column is null
    Null,

    /// Boolean values
    Boolean,

    /// 64-bit signed integers
    Int64,

    /// 64-bit floating point, possibly mixed with integers
    Float64,

    /// UTF-8 strings
    String,

    /// Values of more than one kind
    Mixed,
}

impl DataType {
    /// Get the type of a single value.
    pub fn of(value: &Value) -> DataType {
        match value {
            Value::Null => DataType::Null,
            Value::Bool(_) => DataType::Boolean,
            Value::Int(_) => DataType::Int64,
            Value::Float(_) => DataType::Float64,
            Value::String(_) => DataType::String,
        }
    }

    /// Widen this type so that it also covers `other`.
    pub fn merge(self, other: DataType) -> DataType {
        match (self, other) {
            (a, b) if a == b => a,
            (DataType::Null, b) => b,
            (a, DataType::Null) => a,
            (DataType::Int64, DataType::Float64) | (DataType::Float64, DataType::Int64) => DataType::Float64,
            _ => DataType::Mixed,
        }
    }
}

/// Field definition in a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Column name
    pub name: String,

    /// Inferred data type
    pub data_type: DataType,

    /// Whether at least one value is null
    pub nullable: bool,
}

impl Field {
    /// Create a new field.
    pub fn new(name: &str, data_type: DataType, nullable: bool) -> Self {
        Field {
            name: name.to_string(),
            data_type,
            nullable,
        }
    }
}

/// Schema of a table: its columns in source order.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Fields in the schema
    pub fields: Vec<Field>,

    /// Field name to index mapping
    field_indices: HashMap<String, usize>,
}

impl Schema {
    /// Create a new schema. Column names must be unique.
    pub fn new(fields: Vec<Field>) -> Result<Self> {
        let mut field_indices = HashMap::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            if field_indices.insert(field.name.clone(), i).is_some() {
                return Err(Error::InvalidArgument(format!(
                    "Duplicate column name: {}",
                    field.name
                )));
            }
        }

        Ok(Schema {
            fields,
            field_indices,
        })
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.field_indices.get(name).map(|&i| &self.fields[i])
    }

    /// Get the index of a field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Get the number of fields in the schema.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema contains a field with the given name.
    pub fn contains_field(&self, name: &str) -> bool {
        self.field_indices.contains_key(name)
    }

    /// Iterate over the column names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}
