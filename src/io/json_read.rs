use serde_json::{Map, Value};

use crate::error::{ConvertError, Result};
use crate::model::{ID_FIELD, Record};

/// Parses JSON text and normalises it into a flat record list.
pub fn parse_document(text: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(text)?;
    records_from_value(value)
}

/// Classifies a parsed JSON document into one of the two supported shapes
/// and normalises both to a record list.
///
/// A top-level array must contain objects only and is used in document
/// order. A top-level object must map record ids to objects; each outer key
/// is injected as an `id` field unless the record already defines one, and
/// the `id` field leads the record so that inferred columns start with it.
pub fn records_from_value(value: Value) -> Result<Vec<Record>> {
    match value {
        Value::Array(items) => {
            let mut records = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(record) => records.push(record),
                    other => {
                        return Err(ConvertError::Shape(format!(
                            "array elements must be objects, found {}",
                            type_name(&other)
                        )));
                    }
                }
            }
            Ok(records)
        }
        Value::Object(entries) => {
            let mut records = Vec::with_capacity(entries.len());
            for (key, item) in entries {
                match item {
                    Value::Object(record) => records.push(keyed_record(key, record)),
                    other => {
                        return Err(ConvertError::Shape(format!(
                            "object values must be objects, found {} under key '{key}'",
                            type_name(&other)
                        )));
                    }
                }
            }
            Ok(records)
        }
        other => Err(ConvertError::Shape(format!(
            "top-level JSON must be an object or an array, found {}",
            type_name(&other)
        ))),
    }
}

/// Rebuilds a dict-of-dicts record with its identifier first. The record's
/// own `id` value wins over the outer key.
fn keyed_record(key: String, record: Record) -> Record {
    let mut keyed = Map::with_capacity(record.len() + 1);
    let id = match record.get(ID_FIELD) {
        Some(own) => own.clone(),
        None => Value::String(key),
    };
    keyed.insert(ID_FIELD.to_string(), id);
    for (name, value) in record {
        if name != ID_FIELD {
            keyed.insert(name, value);
        }
    }
    keyed
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
