//! YAML boundary of a [`Document`](crate::Document).
//!
//! Decoding goes through the generic serde impls of [`Value`]. Encoding
//! converts to [`serde_yaml::Value`] first: YAML numbers are limited to
//! machine integers and `f64`, so a literal number that neither form can hold
//! exactly is written as a string and keeps its text.

use crate::value::{exact_i64, exact_u64};
use crate::{Error, Map, Number, Result, Value};

pub(crate) fn decode(input: &str, precise_numbers: bool) -> Result<Option<Map>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let mut value: Value = serde_yaml::from_str(input)?;
    if !precise_numbers {
        value = value.into_float_numbers();
    }
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        other => Err(Error::type_mismatch("object", other.type_name())),
    }
}

/// `None` encodes to YAML's `null`.
pub(crate) fn encode(data: Option<&Map>) -> Result<String> {
    let yaml = match data {
        Some(map) => serde_yaml::Value::Mapping(map_to_yaml(map)),
        None => serde_yaml::Value::Null,
    };
    Ok(serde_yaml::to_string(&yaml)?)
}

fn to_yaml_value(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Number(Number::Float(f)) => serde_yaml::Value::Number((*f).into()),
        Value::Number(Number::Literal(s)) => literal_to_yaml(s),
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Array(items) => serde_yaml::Value::Sequence(items.iter().map(to_yaml_value).collect()),
        Value::Object(map) => serde_yaml::Value::Mapping(map_to_yaml(map)),
    }
}

fn literal_to_yaml(text: &str) -> serde_yaml::Value {
    if let Some(i) = exact_i64(text) {
        return serde_yaml::Value::Number(i.into());
    }
    if let Some(u) = exact_u64(text) {
        return serde_yaml::Value::Number(u.into());
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() && f.to_string() == text => serde_yaml::Value::Number(f.into()),
        _ => serde_yaml::Value::String(text.to_string()),
    }
}

fn map_to_yaml(map: &Map) -> serde_yaml::Mapping {
    map.iter()
        .map(|(k, v)| (serde_yaml::Value::String(k.clone()), to_yaml_value(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    #[test]
    fn test_decode() {
        let map = decode("name: Alice\nage: 42\ntags: [a, b]\n", true)
            .unwrap()
            .unwrap();
        assert_eq!(map.get("name"), Some(&Value::from("Alice")));
        assert_eq!(
            map.get("age"),
            Some(&Value::Number(Number::Literal("42".to_string())))
        );
        assert_eq!(
            map.get("tags"),
            Some(&Value::Array(vec![Value::from("a"), Value::from("b")]))
        );
    }

    #[test]
    fn test_decode_absent() {
        assert_eq!(decode("", true).unwrap(), None);
        assert_eq!(decode("null", true).unwrap(), None);
        assert_eq!(decode("~", true).unwrap(), None);
    }

    #[test]
    fn test_decode_rejects_scalar() {
        assert!(decode("42", true).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(None).unwrap().trim(), "null");

        let map = decode("a:\n  b: 1\n", true).unwrap().unwrap();
        assert_eq!(encode(Some(&map)).unwrap(), "a:\n  b: 1\n");
    }

    #[test]
    fn test_encode_keeps_literal_text() {
        let literal = |s: &str| Value::Number(Number::Literal(s.to_string()));
        let mut map = Map::new();
        map.insert("big".to_string(), literal("123456789012345678901234567890"));
        map.insert("dec".to_string(), literal("0.10"));
        map.insert("half".to_string(), literal("1.5"));
        map.insert("n".to_string(), literal("-42"));

        let back = decode(&encode(Some(&map)).unwrap(), true).unwrap().unwrap();
        assert_eq!(
            back.get("big"),
            Some(&Value::from("123456789012345678901234567890"))
        );
        assert_eq!(back.get("dec"), Some(&Value::from("0.10")));
        assert_eq!(back.get("half"), Some(&Value::Number(Number::Float(1.5))));
        assert_eq!(back.get("n"), Some(&literal("-42")));
    }
}
