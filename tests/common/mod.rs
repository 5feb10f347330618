#![allow(dead_code)]

use sheetbase::{Record, Table, TableBuilder, Value};

pub fn employees() -> Table {
    let mut builder = TableBuilder::new("employees", ["name", "dept"]).unwrap();
    builder.add_row(["Ann", "Eng"]).unwrap();
    builder.add_row(["Ben", "Sales"]).unwrap();
    builder.add_row(["Cara", "eng"]).unwrap();
    builder.build().unwrap()
}

/// Mixed types and nulls.
pub fn inventory() -> Table {
    let mut builder = TableBuilder::new("inventory", ["sku", "qty", "price", "active", "note"]).unwrap();
    builder
        .add_row(vec![
            Value::from("A-100"),
            Value::Int(12),
            Value::Float(3.0),
            Value::Bool(true),
            Value::Null,
        ])
        .unwrap();
    builder
        .add_row(vec![
            Value::from("B-200"),
            Value::Int(0),
            Value::Float(12.5),
            Value::Bool(false),
            Value::from("discontinued"),
        ])
        .unwrap();
    builder
        .add_row(vec![
            Value::from("C-120"),
            Value::Null,
            Value::Float(120.0),
            Value::Bool(true),
            Value::from("Back in stock"),
        ])
        .unwrap();
    builder.build().unwrap()
}

pub fn names(records: &[Record], column: &str) -> Vec<String> {
    records
        .iter()
        .map(|r| r[column].as_str().unwrap_or_default().to_string())
        .collect()
}
