//! Dynamic value representation for hierarchical documents.
//!
//! This module provides the [`Value`] enum, the closed set of shapes a parsed
//! JSON, XML or YAML document can take, and [`Number`], which keeps the two
//! numeric representations decoders produce apart:
//!
//! - [`Number::Float`]: a fixed-width floating value.
//! - [`Number::Literal`]: the exact textual form of a number, kept as the
//!   decoder read it so that large integers and precise decimals survive.
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_flat::{value, Number, Value};
//!
//! let boolean = Value::from(true);
//! let float = Value::from(3.14);
//! let literal = Value::Number(Number::Literal("18446744073709551616".to_string()));
//!
//! let obj = value!({
//!     "name": "Alice",
//!     "address": { "city": "Lyon" }
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ## Serde
//!
//! `Value` implements `Serialize` and `Deserialize`, so any self-describing
//! serde format can decode into it. Integers arrive as [`Number::Literal`]
//! because their decimal text is exact; floating values arrive as
//! [`Number::Float`]. serde_json's arbitrary precision number token is
//! recognised and kept verbatim.

use crate::Map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// serde_json's private map key used to carry arbitrary precision numbers.
pub(crate) const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// A dynamically-typed representation of any document value.
///
/// # Examples
///
/// ```rust
/// use serde_flat::Value;
///
/// let null = Value::Null;
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(text.is_string());
/// assert_eq!(text.type_name(), "string");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// A numeric value, either floating or kept as exact decimal text.
///
/// # Examples
///
/// ```rust
/// use serde_flat::Number;
///
/// let float = Number::Float(3.5);
/// let literal = Number::Literal("-42".to_string());
///
/// assert_eq!(float.as_f64(), Some(3.5));
/// assert_eq!(literal.as_f64(), Some(-42.0));
/// assert_eq!(literal.to_string(), "-42");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Float(f64),
    Literal(String),
}

impl Number {
    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this number is kept as exact text.
    #[inline]
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Number::Literal(_))
    }

    /// Converts this number to an `f64`.
    ///
    /// Literals are parsed; `None` is returned when the text is not a valid
    /// floating-point literal.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Float(f) => Some(*f),
            Number::Literal(s) => s.parse().ok(),
        }
    }

    /// Returns the exact text of a literal number.
    #[inline]
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Number::Literal(s) => Some(s),
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Float(fl) => f.write_str(&crate::format::fmt_float(*fl)),
            Number::Literal(s) => f.write_str(s),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

macro_rules! number_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Literal(value.to_string())
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl Value {
    /// Returns a short name of this value's shape, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` for every value that is not an object.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !self.is_object()
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// This is a strict accessor; the lenient conversions live on
    /// [`Document`](crate::Document) and in the `TryFrom<&Value>` impls.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Replaces every literal number in this value by its floating form.
    ///
    /// A literal that does not parse as `f64` is left untouched.
    #[must_use]
    pub fn into_float_numbers(self) -> Value {
        match self {
            Value::Number(Number::Literal(s)) => match s.parse::<f64>() {
                Ok(f) => Value::Number(Number::Float(f)),
                Err(_) => Value::Number(Number::Literal(s)),
            },
            Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::into_float_numbers).collect())
            }
            Value::Object(obj) => Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, v.into_float_numbers()))
                    .collect(),
            ),
            other => other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Object(obj) => write!(f, "{{object:{}}}", obj.len()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Number(Number::Literal(s)) => serialize_literal(s, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => obj.serialize(serializer),
        }
    }
}

/// Integers that fit a machine word keep their native form. Any other valid
/// number goes out as serde_json's arbitrary precision token so its text
/// survives unchanged; text that is not a number is written as a string.
fn serialize_literal<S>(text: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if let Some(i) = exact_i64(text) {
        return serializer.serialize_i64(i);
    }
    if let Some(u) = exact_u64(text) {
        return serializer.serialize_u64(u);
    }
    match serde_json::from_str::<serde_json::Number>(text) {
        Ok(number) => number.serialize(serializer),
        Err(_) => serializer.serialize_str(text),
    }
}

/// Parses `text` as an `i64` only when printing it back gives the same text.
pub(crate) fn exact_i64(text: &str) -> Option<i64> {
    text.parse::<i64>().ok().filter(|i| i.to_string() == text)
}

/// Parses `text` as a `u64` only when printing it back gives the same text.
pub(crate) fn exact_u64(text: &str) -> Option<u64> {
    text.parse::<u64>().ok().filter(|u| u.to_string() == text)
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid document value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let first: Option<String> = map.next_key()?;
                let Some(first) = first else {
                    return Ok(Value::Object(Map::new()));
                };
                if first == JSON_NUMBER_TOKEN {
                    let text: String = map.next_value()?;
                    return Ok(Value::Number(Number::Literal(text)));
                }

                let mut values = Map::new();
                values.insert(first, map.next_value()?);
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(
            Value::from(42i64),
            Value::Number(Number::Literal("42".to_string()))
        );
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<bool>), Value::Null);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(1.0).type_name(), "number");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
        assert_eq!(Value::Object(Map::new()).type_name(), "object");
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Float(3.14).to_string(), "3.14");
        assert_eq!(Number::Float(123.0).to_string(), "123");
        assert_eq!(Number::Float(1e300).to_string(), "1e+300");
        assert_eq!(Number::Literal("1.50".to_string()).to_string(), "1.50");
    }

    #[test]
    fn test_into_float_numbers() {
        let mut map = Map::new();
        map.insert("n".to_string(), Value::from(7u8));
        let value = Value::Array(vec![Value::Object(map)]).into_float_numbers();

        let inner = &value.as_array().unwrap()[0];
        assert_eq!(
            inner.as_object().unwrap().get("n"),
            Some(&Value::Number(Number::Float(7.0)))
        );
    }

    #[test]
    fn test_deserialize_keeps_integer_text() {
        let value: Value = serde_json::from_str(r#"{"big": 18446744073709551617}"#).unwrap();
        let big = value.as_object().unwrap().get("big").unwrap();
        assert_eq!(
            big,
            &Value::Number(Number::Literal("18446744073709551617".to_string()))
        );
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_leaf(v: &Value) -> bool {
            v.is_leaf()
        }

        assert!(check_leaf(&Value::Null));
        assert!(!check_leaf(&Value::Object(Map::new())));
    }
}
