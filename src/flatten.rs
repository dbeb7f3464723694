use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::model::Record;

/// A table ready to be serialised as delimited text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Resolves the output column order. An explicit non-empty field list wins
/// and is deduplicated on first occurrence; otherwise columns are inferred
/// from the records in first-seen order across all records.
pub fn resolve_columns(records: &[Record], explicit: Option<&[String]>) -> Vec<String> {
    match explicit {
        Some(fields) if !fields.is_empty() => dedup_first(fields),
        _ => infer_columns(records),
    }
}

fn dedup_first(fields: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    fields
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

fn infer_columns(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for record in records {
        for name in record.keys() {
            if seen.insert(name.clone()) {
                columns.push(name.clone());
            }
        }
    }
    columns
}

/// Materialises the records against the resolved column order. Fields
/// missing from a record render as empty cells; fields outside the column
/// order are dropped.
pub fn build_table(records: &[Record], columns: Vec<String>) -> Result<Table> {
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let mut cells = Vec::with_capacity(columns.len());
        for column in &columns {
            let cell = match record.get(column) {
                Some(value) => cell_text(value)?,
                None => String::new(),
            };
            cells.push(cell);
        }
        rows.push(cells);
    }
    Ok(Table { columns, rows })
}

/// Converts a single JSON value into its cell text. Null renders as an
/// empty cell, booleans as lowercase literals, numbers in their canonical
/// decimal form, and composite values as compact JSON so no information is
/// silently dropped.
fn cell_text(value: &Value) -> Result<String> {
    Ok(match value {
        Value::Null => String::new(),
        Value::Bool(value) => value.to_string(),
        Value::Number(value) => value.to_string(),
        Value::String(value) => value.clone(),
        other => serde_json::to_string(other)?,
    })
}
