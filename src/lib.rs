//! # serde_flat
//!
//! Flatten hierarchical JSON, XML or YAML documents into a single-level
//! key/value namespace, and read them back through lenient typed getters.
//!
//! ## What does flattening do?
//!
//! Every leaf of a nested document is lifted to the top level under a key
//! built from its path, in snake case:
//!
//! ```text
//! {"object": {"firstName": "Ada", "id": 1}}  →  {"first_name": "Ada", "id": 1}
//! ```
//!
//! Paths are normalized once (`["object", "firstName"]` → `object_first_name`),
//! then the longest prefix shared by every key is trimmed when it ends on a
//! `_` boundary. Arrays are leaves and are kept whole.
//!
//! ## Key Features
//!
//! - **Ignore lists**: whole branches can be left out of the flat map
//! - **Exact numbers**: JSON numbers keep their text, so large integers survive
//! - **XML round-trip**: nested maps encode to nested elements and decode back
//! - **Lenient getters**: `"true"`, `"42"` or `42.9` convert to the requested type
//! - **Absent vs empty**: a `null` payload stays distinct from `{}`
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_flat::{from_json_str, Value};
//!
//! let doc = from_json_str(r#"{
//!     "array": [1, 2, 3],
//!     "boolean": true,
//!     "object": { "a": "b", "c": "d" }
//! }"#)
//! .unwrap();
//!
//! let flat = doc.flatten(&[&["object", "c"]]).unwrap();
//! assert_eq!(flat.get("object_a"), Some(&Value::from("b")));
//! assert!(flat.get("object_c").is_none());
//!
//! assert!(doc.bool(&["boolean"]).unwrap());
//! assert_eq!(doc.string(&["object", "a"]).unwrap(), "b");
//! ```
//!
//! ### XML
//!
//! ```rust
//! use serde_flat::{from_xml_str, to_xml_string};
//!
//! let doc = from_xml_str("<d><object><a>b</a></object><n>1|2</n></d>").unwrap();
//! assert_eq!(doc.string(&["n"]).unwrap(), "1|2");
//! assert_eq!(to_xml_string(&doc).unwrap(), "<d><object><a>b</a></object><n>1|2</n></d>");
//! ```
//!
//! ### Building values
//!
//! ```rust
//! use serde_flat::{value, Document};
//!
//! let doc = Document::from_value(value!({
//!     "geek": { "name": "Alice", "age": 42 }
//! }))
//! .unwrap();
//!
//! let flat = doc.flatten(&[]).unwrap();
//! assert!(flat.contains_key("name"));
//! assert!(flat.contains_key("age"));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: flatten summaries and key
//! collisions at `debug`, XML path entries and skipped branches at `trace`.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`flatten.rs`** - Flattening with ignore lists and prefix trimming
//! - **`xml_roundtrip.rs`** - XML encoding, namespaces and decoding
//! - **`typed_access.rs`** - Typed and lenient getters
//!
//! Run any example with: `cargo run --example <name>`

mod coerce;
pub mod document;
pub mod error;
pub mod flatten;
pub mod format;
pub mod json;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;
pub mod xml;
mod yaml;

pub use document::Document;
pub use error::{Error, Result};
pub use map::{FlatMap, Map};
pub use options::{Options, DEFAULT_XML_ARRAY_SEPARATOR, DEFAULT_XML_NAME};
pub use ser::{to_value, ValueSerializer};
pub use value::{Number, Value};

/// Decodes a JSON document.
///
/// # Examples
///
/// ```rust
/// use serde_flat::from_json_str;
///
/// let doc = from_json_str(r#"{"n": 18446744073709551617}"#).unwrap();
/// assert_eq!(doc.string(&["n"]).unwrap(), "18446744073709551617");
///
/// assert!(from_json_str("null").unwrap().data().is_none());
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or its top level is
/// neither an object nor `null`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_str(input: &str) -> Result<Document> {
    Document::from_json_str(input)
}

/// Encodes a document as compact JSON.
///
/// # Errors
///
/// Returns an error if serde_json fails to encode the tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string(doc: &Document) -> Result<String> {
    doc.to_json_string()
}

/// Decodes an XML document.
///
/// # Errors
///
/// Returns an error if the input is not well-formed XML or has no root
/// element.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_xml_str(input: &str) -> Result<Document> {
    Document::from_xml_str(input)
}

/// Encodes a document as XML using its options.
///
/// # Errors
///
/// Returns [`Error::InvalidXmlName`] when a key, the root name or an
/// attribute name is not a valid XML name, or an error if the XML writer
/// fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_xml_string(doc: &Document) -> Result<String> {
    doc.to_xml_string()
}

/// Decodes a YAML document.
///
/// # Examples
///
/// ```rust
/// use serde_flat::from_yaml_str;
///
/// let doc = from_yaml_str("server:\n  port: 8080\n").unwrap();
/// assert_eq!(doc.u64(&["server", "port"]).unwrap(), 8080);
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid YAML or its top level is
/// neither a mapping nor `null`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_yaml_str(input: &str) -> Result<Document> {
    Document::from_yaml_str(input)
}

/// Encodes a document as YAML.
///
/// # Errors
///
/// Returns an error if serde_yaml fails to encode the tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_yaml_string(doc: &Document) -> Result<String> {
    doc.to_yaml_string()
}
