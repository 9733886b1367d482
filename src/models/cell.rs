//! Decoding for spreadsheet cells, which arrive as whatever JSON type the
//! sheet inferred for the column.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text column: null becomes empty, numbers and booleans their display form.
pub(crate) fn deserialize_cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Boolean column: real booleans, `TRUE`/`FALSE` text, or 0/1.
pub(crate) fn deserialize_cell_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1")
        }
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}
