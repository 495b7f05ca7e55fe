//! Serde helpers for the loosely typed parts of the backend JSON

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

/// Accepts `"12"` as well as `12` and keeps the value as a path segment string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
    }

    #[test]
    fn test_accepts_both_shapes() {
        let a: Holder = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"id": "42"}"#).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(b.id, "42");
    }
}
