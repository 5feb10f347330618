//! Loader for JSON record arrays.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::ingest::TableSource;
use crate::tabular::table::{Table, TableBuilder};
use crate::tabular::value::Value;

/// Loads a JSON array of objects, one object per row.
///
/// Columns are the object keys in first-seen order across all records. A
/// record without a key gets a null for that column. Nested arrays and
/// objects are stored as their compact JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordsSource;

impl TableSource for JsonRecordsSource {
    fn load(&self, name: &str, bytes: &[u8]) -> Result<Table> {
        let document: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| Error::Parse(format!("invalid JSON: {}", e)))?;

        let records = match document {
            serde_json::Value::Array(records) => records,
            _ => return Err(Error::Parse("expected a JSON array of records".into())),
        };

        let mut objects = Vec::with_capacity(records.len());
        for (i, record) in records.into_iter().enumerate() {
            match record {
                serde_json::Value::Object(object) => objects.push(object),
                other => {
                    return Err(Error::Parse(format!(
                        "record {} is not an object: {}",
                        i, other
                    )))
                }
            }
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut columns: Vec<&str> = Vec::new();
        for object in &objects {
            for key in object.keys() {
                if seen.insert(key) {
                    columns.push(key);
                }
            }
        }

        let mut builder = TableBuilder::new(name, &columns)?;
        for object in &objects {
            builder.add_record(object.iter().map(|(key, value)| (key, Value::from(value))))?;
        }

        let table = builder.build()?;
        tracing::debug!(
            table = name,
            rows = table.row_count(),
            columns = table.schema().field_count(),
            "loaded JSON records"
        );
        Ok(table)
    }
}
