//! JSON boundary of a [`Document`](crate::Document).
//!
//! Decoding and encoding go through [`serde_json::Value`]. With serde_json's
//! `arbitrary_precision` feature, every number keeps the exact text it was
//! written with, so `18446744073709551617` or `0.10` come back unchanged.

use crate::{Error, Map, Number, Result, Value};
use std::io::Write;

/// Decodes a JSON payload into an optional top-level map.
///
/// Blank input and a top-level `null` decode to `None`. Any other non-object
/// top level is a type mismatch.
pub(crate) fn decode(input: &str, precise_numbers: bool) -> Result<Option<Map>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let json: serde_json::Value = serde_json::from_str(input)?;
    let mut value = from_json_value(json);
    if !precise_numbers {
        value = value.into_float_numbers();
    }
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        other => Err(Error::type_mismatch("object", other.type_name())),
    }
}

/// Encodes an optional map as compact JSON. `None` encodes to `null`.
pub(crate) fn encode(data: Option<&Map>) -> Result<String> {
    let json = match data {
        Some(map) => serde_json::Value::Object(map_to_json(map)),
        None => serde_json::Value::Null,
    };
    Ok(serde_json::to_string(&json)?)
}

/// Writes the compact JSON form followed by a newline.
pub(crate) fn encode_to_writer<W: Write>(data: Option<&Map>, mut writer: W) -> Result<()> {
    let text = encode(data)?;
    writer.write_all(text.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Converts a serde_json tree, keeping numbers as their exact text.
#[must_use]
pub fn from_json_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(Number::Literal(n.to_string())),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(from_json_value).collect())
        }
        serde_json::Value::Object(obj) => Value::Object(
            obj.into_iter()
                .map(|(k, v)| (k, from_json_value(v)))
                .collect(),
        ),
    }
}

/// Converts a [`Value`] into a serde_json tree.
///
/// Literal numbers are emitted verbatim when they are valid JSON numbers and
/// as strings otherwise. Non-finite floats have no JSON form and become
/// `null`.
#[must_use]
pub fn to_json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::Number(Number::Literal(s)) => match serde_json::from_str::<serde_json::Number>(s) {
            Ok(n) => serde_json::Value::Number(n),
            Err(_) => serde_json::Value::String(s.clone()),
        },
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json_value).collect()),
        Value::Object(map) => serde_json::Value::Object(map_to_json(map)),
    }
}

fn map_to_json(map: &Map) -> serde_json::Map<String, serde_json::Value> {
    map.iter()
        .map(|(k, v)| (k.clone(), to_json_value(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_decode_absent() {
        assert_eq!(decode("", true).unwrap(), None);
        assert_eq!(decode("  \n", true).unwrap(), None);
        assert_eq!(decode("null", true).unwrap(), None);
    }

    #[test]
    fn test_decode_present_empty() {
        assert_eq!(decode("{}", true).unwrap(), Some(Map::new()));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let err = decode("[1, 2]", true).unwrap_err();
        assert_eq!(err.to_string(), "wrong data type: object expected, got array");
        assert!(matches!(decode("{", true), Err(Error::Json(_))));
    }

    #[test]
    fn test_decode_keeps_exact_numbers() {
        let map = decode(r#"{"big": 18446744073709551617, "dec": 0.10}"#, true)
            .unwrap()
            .unwrap();
        assert_eq!(
            map.get("big"),
            Some(&Value::Number(Number::Literal("18446744073709551617".to_string())))
        );
        assert_eq!(
            map.get("dec"),
            Some(&Value::Number(Number::Literal("0.10".to_string())))
        );
    }

    #[test]
    fn test_decode_float_numbers() {
        let map = decode(r#"{"n": 123}"#, false).unwrap().unwrap();
        assert_eq!(map.get("n"), Some(&Value::Number(Number::Float(123.0))));
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(None).unwrap(), "null");
        assert_eq!(encode(Some(&Map::new())).unwrap(), "{}");

        let doc = value!({ "a": [1, 2.5, "x"], "b": { "c": null } });
        assert_eq!(
            encode(doc.as_object()).unwrap(),
            r#"{"a":[1,2.5,"x"],"b":{"c":null}}"#
        );
    }

    #[test]
    fn test_encode_to_writer_appends_newline() {
        let mut buf = Vec::new();
        encode_to_writer(None, &mut buf).unwrap();
        assert_eq!(buf, b"null\n");
    }

    #[test]
    fn test_to_json_value_literals() {
        let big = Value::Number(Number::Literal("18446744073709551617".to_string()));
        assert_eq!(
            serde_json::to_string(&to_json_value(&big)).unwrap(),
            "18446744073709551617"
        );

        let odd = Value::Number(Number::Literal("0x1f".to_string()));
        assert_eq!(to_json_value(&odd), serde_json::Value::String("0x1f".to_string()));
        assert_eq!(to_json_value(&Value::from(f64::NAN)), serde_json::Value::Null);
    }
}
