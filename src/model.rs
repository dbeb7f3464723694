use serde_json::{Map, Value};

/// A single flat record: field name → JSON value. Insertion order is
/// preserved by serde_json's `preserve_order` feature, which the column
/// inference rules rely on.
pub type Record = Map<String, Value>;

/// Field injected for dict-of-dicts inputs whose records do not already
/// carry an identifier.
pub const ID_FIELD: &str = "id";
