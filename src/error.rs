//! Error types for lookups, typed accessors and document codecs.
//!
//! Two kinds carry the accessor semantics:
//!
//! - **Not found**: the path is absent, or one of its intermediate segments
//!   is not a mapping.
//! - **Type mismatch**: the value exists but cannot be converted to the
//!   requested primitive. The error names the expected and the actual shape.
//!
//! Everything else is surfaced unchanged from the collaborator that produced
//! it: string parsers used by the lenient coercions, chrono for time layouts,
//! quick-xml, serde_json and serde_yaml for the codecs.
//!
//! ## Examples
//!
//! ```rust
//! use serde_flat::{value, Document};
//!
//! let doc = Document::from_value(value!({ "enabled": true })).unwrap();
//!
//! assert!(doc.string(&["missing"]).unwrap_err().is_not_found());
//! assert!(doc.string(&["enabled"]).unwrap_err().is_type_mismatch());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested path does not exist in the document.
    #[error("not found")]
    NotFound,

    /// The value behind the path cannot be converted to the requested type.
    #[error("wrong data type: {expected} expected, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A string could not be read as a boolean literal.
    #[error("invalid boolean literal {input:?}")]
    ParseBool { input: String },

    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),

    #[error(transparent)]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error(transparent)]
    ParseBigInt(#[from] num_bigint::ParseBigIntError),

    /// The value did not match the requested time layout.
    #[error(transparent)]
    Time(#[from] chrono::ParseError),

    /// Tokenizer or writer failure from the XML codec.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// The XML payload ended before any root element was opened.
    #[error("missing XML root element")]
    MissingRoot,

    /// A key, root name or attribute name cannot be written as an XML name.
    #[error("invalid XML name {0:?}")]
    InvalidXmlName(String),

    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Custom error raised through serde.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error from the expected and found shape names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flat::Error;
    ///
    /// let err = Error::type_mismatch("bool", "number");
    /// assert_eq!(err.to_string(), "wrong data type: bool expected, got number");
    /// ```
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for [`Error::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }

    /// Returns `true` for [`Error::TypeMismatch`].
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
