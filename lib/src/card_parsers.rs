//! Card parsers module.
//!
//! Lenient field parsers for card records: a field of unexpected type is
//! read as absent instead of failing the whole record.

pub mod opt_string_parser {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(str::to_owned))
    }
}

pub mod opt_id_parser {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|id| id.fract() == 0.0 && id.abs() < i64::MAX as f64)
                .map(|id| id as i64)
        }))
    }
}
