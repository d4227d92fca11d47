//! XML projection of a [`Document`](crate::Document).
//!
//! Encoding writes the document under one root element configured by
//! [`Options`](crate::Options): every nested map becomes an element wrapping
//! its children and every leaf becomes an element whose text is rendered by
//! [`fmt_string`](crate::format::fmt_string).
//!
//! Decoding is a two step process. The element stream is first linearized
//! into path entries (`root>object>a` → `"b"`), recording only elements that
//! never opened a child. The entries are then expanded back into nested maps,
//! with the root segment dropped.
//!
//! Namespaced element names are kept as `alias:local` when the namespace URI
//! was declared with an `xmlns:alias` attribute on the root element, which
//! later flattens to `alias_local`.
//!
//! Leaf text is always kept as a string: `1|2|3` and `true` are not re-typed.
//!
//! ```rust
//! use serde_flat::Document;
//!
//! let doc = Document::from_xml_str(
//!     r#"<root xmlns:hyp="hyp"><hyp:number>123</hyp:number><s>x</s></root>"#,
//! )
//! .unwrap();
//!
//! let flat = doc.flatten(&[]).unwrap();
//! assert_eq!(flat.get("hyp_number").and_then(|v| v.as_str()), Some("123"));
//! ```

mod de;
mod ser;

pub(crate) use de::decode;
pub use de::{expand, linearize, PathEntries};
pub(crate) use ser::{encode, encode_to_writer};

/// Joins element names into a path entry key.
pub const XML_LEVEL_SEPARATOR: &str = ">";

/// Joins a namespace alias and a local element name.
pub const XML_NAMESPACE_SEPARATOR: &str = ":";
