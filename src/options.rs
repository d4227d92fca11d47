//! Construction options of a [`Document`](crate::Document).
//!
//! Options are fixed when the document is built and only read afterwards.
//! They drive the XML projection (root element name, namespace, root
//! attributes and the separator used to join array leaves) and how decoders
//! store numbers.
//!
//! ## Examples
//!
//! ```rust
//! use serde_flat::{value, Document, Options};
//!
//! let options = Options::new()
//!     .with_xml_name("custom")
//!     .with_xml_namespace("http://schemas.xmlsoap.org/soap/envelope/")
//!     .with_xml_attributes(vec![(
//!         "xmlns:xsi".to_string(),
//!         "http://www.w3.org/2001/XMLSchema-instance".to_string(),
//!     )]);
//!
//! let doc = Document::from_value_with_options(
//!     value!({ "languages": { "fr": "French" } }),
//!     options,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     doc.to_xml_string().unwrap(),
//!     "<custom xmlns=\"http://schemas.xmlsoap.org/soap/envelope/\" \
//!      xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
//!      <languages><fr>French</fr></languages></custom>"
//! );
//! ```

/// Default name of the XML root element.
pub const DEFAULT_XML_NAME: &str = "d";

/// Default separator placed between array values in XML text content.
pub const DEFAULT_XML_ARRAY_SEPARATOR: &str = "|";

/// Configuration of a [`Document`](crate::Document).
///
/// # Examples
///
/// ```rust
/// use serde_flat::Options;
///
/// let options = Options::new();
/// assert_eq!(options.xml_name, "d");
/// assert_eq!(options.xml_array_separator, "|");
/// assert!(options.xml_namespace.is_none());
/// assert!(options.precise_numbers);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub xml_name: String,
    pub xml_namespace: Option<String>,
    pub xml_array_separator: String,
    pub xml_attributes: Vec<(String, String)>,
    /// Keep decoded numbers as exact text instead of converting them to `f64`.
    pub precise_numbers: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            xml_name: DEFAULT_XML_NAME.to_string(),
            xml_namespace: None,
            xml_array_separator: DEFAULT_XML_ARRAY_SEPARATOR.to_string(),
            xml_attributes: Vec::new(),
            precise_numbers: true,
        }
    }
}

impl Options {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the XML root element. An empty name is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flat::Options;
    ///
    /// assert_eq!(Options::new().with_xml_name("root").xml_name, "root");
    /// assert_eq!(Options::new().with_xml_name("").xml_name, "d");
    /// ```
    #[must_use]
    pub fn with_xml_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.xml_name = name;
        }
        self
    }

    /// Sets the default namespace declared on the XML root element.
    /// An empty namespace is ignored.
    #[must_use]
    pub fn with_xml_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        if !namespace.is_empty() {
            self.xml_namespace = Some(namespace);
        }
        self
    }

    /// Sets the separator used to join array values in XML text content.
    /// An empty separator is ignored.
    #[must_use]
    pub fn with_xml_array_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        if !separator.is_empty() {
            self.xml_array_separator = separator;
        }
        self
    }

    /// Replaces the extra attributes written on the XML root element.
    #[must_use]
    pub fn with_xml_attributes(mut self, attributes: Vec<(String, String)>) -> Self {
        self.xml_attributes = attributes;
        self
    }

    /// Chooses whether decoded numbers keep their exact text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flat::{Document, Number, Options, Value};
    ///
    /// let options = Options::new().with_precise_numbers(false);
    /// let doc = Document::from_json_str_with_options(r#"{"n": 1}"#, options).unwrap();
    /// assert_eq!(doc.lookup(&["n"]).unwrap(), &Value::Number(Number::Float(1.0)));
    /// ```
    #[must_use]
    pub fn with_precise_numbers(mut self, precise: bool) -> Self {
        self.precise_numbers = precise;
        self
    }
}
