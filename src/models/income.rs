use serde::{Deserialize, Deserializer, Serialize};

/// Weekly income aggregate computed by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Income {
    #[serde(default, deserialize_with = "deserialize_total")]
    pub total: f64,
}

impl Income {
    pub fn new(total: f64) -> Self {
        Self { total }
    }

    /// Dollar display, e.g. `$250` or `$99.5`.
    pub fn display(&self) -> String {
        format!("${}", self.total)
    }
}

/// The aggregate may come back as a number, numeric text, or null.
fn deserialize_total<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(0.0),
        Some(serde_json::Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom("total is not representable as f64")),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(0.0),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("total is not numeric: {s}"))),
        Some(other) => Err(D::Error::custom(format!("unexpected total: {other}"))),
    }
}
