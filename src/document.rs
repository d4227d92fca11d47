//! The [`Document`] type: a hierarchical document plus its construction
//! options.
//!
//! A document is either *absent* (decoded from an empty or `null` payload) or
//! a present map, possibly with no entries. The two cases stay distinct
//! through every operation: [`Document::flatten`] returns `None` for both an
//! absent and an empty document, JSON encodes an absent document as `null`
//! and an empty one as `{}`.
//!
//! ## Lookup and typed getters
//!
//! ```rust
//! use serde_flat::{value, Document};
//!
//! let doc = Document::from_value(value!({
//!     "server": { "port": "8080", "debug": "true", "ratio": 0.5 },
//!     "tags": ["a", "b"]
//! }))
//! .unwrap();
//!
//! assert_eq!(doc.u64(&["server", "port"]).unwrap(), 8080);
//! assert!(doc.bool(&["server", "debug"]).unwrap());
//! assert_eq!(doc.f64(&["server", "ratio"]).unwrap(), 0.5);
//! assert_eq!(doc.strings(&["tags"]).unwrap(), vec!["a", "b"]);
//!
//! assert!(doc.i64(&["server", "missing"]).unwrap_err().is_not_found());
//! assert_eq!(doc.should_i64(&["server", "missing"]), 0);
//! ```

use crate::{coerce, flatten, json, xml, yaml};
use crate::{Error, FlatMap, Map, Options, Result, Value};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::io::Write;

/// A hierarchical document with lookup, typed getters, flattening and
/// JSON, YAML and XML codecs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    data: Option<Map>,
    options: Options,
}

impl Document {
    /// Creates a present document with default options.
    #[must_use]
    pub fn new(data: Map) -> Self {
        Document {
            data: Some(data),
            options: Options::default(),
        }
    }

    /// Builds a document from a value: an object becomes a present document,
    /// `null` the absent one.
    ///
    /// # Errors
    ///
    /// Any other value is a type mismatch.
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_value_with_options(value, Options::default())
    }

    pub fn from_value_with_options(value: Value, options: Options) -> Result<Self> {
        let data = match value {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => return Err(Error::type_mismatch("object", other.type_name())),
        };
        Ok(Document { data, options })
    }

    /// Replaces the options of this document.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Returns the top-level map, or `None` for the absent document.
    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<&Map> {
        self.data.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn into_inner(self) -> Option<Map> {
        self.data
    }

    /// Returns `true` for the absent document and for a document without
    /// entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().map_or(true, Map::is_empty)
    }

    /// Flattens the document into a single-level map.
    ///
    /// Each entry of `ignored` names a branch, as raw path segments, left out
    /// of the result with all of its descendants. Returns `None` when the
    /// document is absent or empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flat::{value, Document, Value};
    ///
    /// let doc = Document::from_value(value!({ "object": { "a": "b", "c": "d" } })).unwrap();
    /// let flat = doc.flatten(&[&["object", "c"]]).unwrap();
    ///
    /// assert_eq!(flat.len(), 1);
    /// assert_eq!(flat.get("object_a"), Some(&Value::from("b")));
    /// ```
    #[must_use]
    pub fn flatten(&self, ignored: &[&[&str]]) -> Option<FlatMap> {
        flatten::flatten(self.data.as_ref()?, ignored)
    }

    /// Returns the value behind a path of keys.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the path is empty, when a key is missing, or
    /// when an intermediate value is not a map.
    pub fn lookup(&self, keys: &[&str]) -> Result<&Value> {
        let (first, rest) = keys.split_first().ok_or(Error::NotFound)?;
        let mut current = self
            .data
            .as_ref()
            .and_then(|map| map.get(first))
            .ok_or(Error::NotFound)?;
        for key in rest {
            current = match current {
                Value::Object(map) => map.get(key).ok_or(Error::NotFound)?,
                _ => return Err(Error::NotFound),
            };
        }
        Ok(current)
    }

    /// Looks up a boolean. Strings such as `"true"`, `"F"` or `"1"` are
    /// accepted.
    pub fn bool(&self, keys: &[&str]) -> Result<bool> {
        coerce::to_bool(self.lookup(keys)?)
    }

    pub fn f64(&self, keys: &[&str]) -> Result<f64> {
        coerce::to_f64(self.lookup(keys)?)
    }

    /// Looks up a signed integer. Floats are truncated toward zero.
    pub fn i64(&self, keys: &[&str]) -> Result<i64> {
        coerce::to_i64(self.lookup(keys)?)
    }

    /// Looks up an unsigned integer. Floats are truncated toward zero.
    pub fn u64(&self, keys: &[&str]) -> Result<u64> {
        coerce::to_u64(self.lookup(keys)?)
    }

    pub fn big_int(&self, keys: &[&str]) -> Result<BigInt> {
        coerce::to_big_int(self.lookup(keys)?)
    }

    /// Looks up a string. Literal numbers are returned as their text;
    /// booleans and floats are type mismatches.
    pub fn string(&self, keys: &[&str]) -> Result<String> {
        coerce::to_string(self.lookup(keys)?)
    }

    /// Looks up an array of strings, converting each element like
    /// [`Document::string`].
    pub fn strings(&self, keys: &[&str]) -> Result<Vec<String>> {
        coerce::to_strings(self.lookup(keys)?)
    }

    /// Looks up a string and parses it with a `strftime` layout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use serde_flat::{value, Document};
    ///
    /// let doc = Document::from_value(value!({ "born": "08/1983" })).unwrap();
    /// assert_eq!(
    ///     doc.time("%m/%Y", &["born"]).unwrap(),
    ///     Utc.with_ymd_and_hms(1983, 8, 1, 0, 0, 0).unwrap()
    /// );
    /// ```
    pub fn time(&self, layout: &str, keys: &[&str]) -> Result<DateTime<Utc>> {
        coerce::to_time(self.lookup(keys)?, layout)
    }

    /// Like [`Document::bool`], with `false` on any error.
    #[must_use]
    pub fn should_bool(&self, keys: &[&str]) -> bool {
        self.bool(keys).unwrap_or_default()
    }

    #[must_use]
    pub fn should_f64(&self, keys: &[&str]) -> f64 {
        self.f64(keys).unwrap_or_default()
    }

    #[must_use]
    pub fn should_i64(&self, keys: &[&str]) -> i64 {
        self.i64(keys).unwrap_or_default()
    }

    #[must_use]
    pub fn should_u64(&self, keys: &[&str]) -> u64 {
        self.u64(keys).unwrap_or_default()
    }

    #[must_use]
    pub fn should_big_int(&self, keys: &[&str]) -> BigInt {
        self.big_int(keys).unwrap_or_default()
    }

    #[must_use]
    pub fn should_string(&self, keys: &[&str]) -> String {
        self.string(keys).unwrap_or_default()
    }

    #[must_use]
    pub fn should_strings(&self, keys: &[&str]) -> Vec<String> {
        self.strings(keys).unwrap_or_default()
    }

    /// Like [`Document::time`], with the Unix epoch on any error.
    #[must_use]
    pub fn should_time(&self, layout: &str, keys: &[&str]) -> DateTime<Utc> {
        self.time(layout, keys).unwrap_or_default()
    }

    /// Decodes a JSON document. Empty input and `null` give the absent
    /// document.
    ///
    /// # Errors
    ///
    /// Syntax errors from serde_json, and a type mismatch when the top level
    /// is neither an object nor `null`.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Self::from_json_str_with_options(input, Options::default())
    }

    pub fn from_json_str_with_options(input: &str, options: Options) -> Result<Self> {
        let data = json::decode(input, options.precise_numbers)?;
        Ok(Document { data, options })
    }

    pub fn from_json_slice(input: &[u8]) -> Result<Self> {
        Self::from_json_slice_with_options(input, Options::default())
    }

    pub fn from_json_slice_with_options(input: &[u8], options: Options) -> Result<Self> {
        Self::from_json_str_with_options(std::str::from_utf8(input)?, options)
    }

    /// Encodes the document as compact JSON; the absent document is `null`.
    pub fn to_json_string(&self) -> Result<String> {
        json::encode(self.data.as_ref())
    }

    /// Writes the JSON form followed by a newline.
    pub fn json_encode<W: Write>(&self, writer: W) -> Result<()> {
        json::encode_to_writer(self.data.as_ref(), writer)
    }

    /// Decodes a YAML document. Blank input and `null` give the absent
    /// document.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Self::from_yaml_str_with_options(input, Options::default())
    }

    pub fn from_yaml_str_with_options(input: &str, options: Options) -> Result<Self> {
        let data = yaml::decode(input, options.precise_numbers)?;
        Ok(Document { data, options })
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        yaml::encode(self.data.as_ref())
    }

    /// Decodes an XML document. Leaves keep their text as strings.
    ///
    /// # Errors
    ///
    /// Tokenizer errors from quick-xml, and [`Error::MissingRoot`] when the
    /// payload holds no element.
    pub fn from_xml_str(input: &str) -> Result<Self> {
        Self::from_xml_str_with_options(input, Options::default())
    }

    pub fn from_xml_str_with_options(input: &str, options: Options) -> Result<Self> {
        let data = xml::decode(input)?;
        Ok(Document { data, options })
    }

    pub fn from_xml_slice(input: &[u8]) -> Result<Self> {
        Self::from_xml_slice_with_options(input, Options::default())
    }

    pub fn from_xml_slice_with_options(input: &[u8], options: Options) -> Result<Self> {
        Self::from_xml_str_with_options(std::str::from_utf8(input)?, options)
    }

    /// Encodes the document as XML. An absent or empty document encodes to
    /// the empty string. Names that are not valid XML names are rejected
    /// before anything is written.
    pub fn to_xml_string(&self) -> Result<String> {
        xml::encode(self.data.as_ref(), &self.options)
    }

    pub fn xml_encode<W: Write>(&self, writer: W) -> Result<()> {
        xml::encode_to_writer(self.data.as_ref(), &self.options, writer)
    }
}

impl From<Map> for Document {
    fn from(data: Map) -> Self {
        Document::new(data)
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = Option::<Map>::deserialize(deserializer)?;
        Ok(Document {
            data,
            options: Options::default(),
        })
    }
}
