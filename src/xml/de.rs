use super::{XML_LEVEL_SEPARATOR, XML_NAMESPACE_SEPARATOR};
use crate::{Error, Map, Result, Value};
use indexmap::IndexMap;
use log::{debug, trace};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{PrefixDeclaration, ResolveResult};
use quick_xml::NsReader;
use std::collections::HashMap;

/// Leaf text keyed by the full element path, root name included.
pub type PathEntries = IndexMap<String, String>;

/// Namespace URI to the alias declared for it on the root element.
type Aliases = HashMap<Vec<u8>, String>;

pub(crate) fn decode(input: &str) -> Result<Option<Map>> {
    let entries = linearize(input)?;
    Ok(Some(expand(entries)))
}

#[derive(Default)]
struct Linearizer {
    tree: Vec<String>,
    entries: PathEntries,
    text: String,
    leaf_open: bool,
}

impl Linearizer {
    fn open(&mut self, name: String) {
        // The root never counts as a leaf.
        self.leaf_open = !self.tree.is_empty();
        self.tree.push(name);
        self.text.clear();
    }

    /// Returns `true` once the root element is closed.
    fn close(&mut self) -> bool {
        if self.leaf_open {
            let path = self.tree.join(XML_LEVEL_SEPARATOR);
            trace!("xml path entry {} = {:?}", path, self.text);
            self.entries.insert(path, std::mem::take(&mut self.text));
            self.leaf_open = false;
        }
        self.tree.pop();
        self.tree.is_empty()
    }
}

/// Streams an XML payload into path entries.
///
/// Only elements that never opened a child element are recorded; their value
/// is the character data read since they opened, with entity and character
/// references resolved and CDATA sections included. Reading stops when the
/// root element closes.
///
/// # Errors
///
/// Tokenizer errors are returned unchanged. A payload without any element
/// fails with [`Error::MissingRoot`].
///
/// # Examples
///
/// ```rust
/// use serde_flat::xml::linearize;
///
/// let entries = linearize("<d><a>1</a><b><c>x &amp; y</c></b></d>").unwrap();
/// assert_eq!(entries.get("d>a").map(String::as_str), Some("1"));
/// assert_eq!(entries.get("d>b>c").map(String::as_str), Some("x & y"));
/// assert_eq!(entries.len(), 2);
/// ```
pub fn linearize(input: &str) -> Result<PathEntries> {
    let mut reader = NsReader::from_str(input);
    let mut aliases = Aliases::new();
    let mut state = Linearizer::default();
    let mut root_seen = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if !root_seen {
                    aliases = declared_aliases(&e)?;
                    root_seen = true;
                }
                state.open(qualified_name(&reader, &e, &aliases)?);
            }
            Event::Empty(e) => {
                if !root_seen {
                    aliases = declared_aliases(&e)?;
                    root_seen = true;
                }
                state.open(qualified_name(&reader, &e, &aliases)?);
                if state.close() {
                    break;
                }
            }
            Event::End(_) => {
                if state.close() {
                    break;
                }
            }
            Event::Text(e) => {
                let raw = std::str::from_utf8(&e)?;
                let text = quick_xml::escape::unescape(raw).map_err(quick_xml::Error::from)?;
                state.text.push_str(&text);
            }
            Event::CData(e) => {
                state.text.push_str(std::str::from_utf8(&e)?);
            }
            Event::GeneralRef(e) => {
                if let Some(ch) = e.resolve_char_ref()? {
                    state.text.push(ch);
                } else {
                    let name = std::str::from_utf8(&e)?;
                    match quick_xml::escape::resolve_predefined_entity(name) {
                        Some(resolved) => state.text.push_str(resolved),
                        None => {
                            trace!("keeping unknown entity &{};", name);
                            state.text.push('&');
                            state.text.push_str(name);
                            state.text.push(';');
                        }
                    }
                }
            }
            Event::Eof => {
                if !root_seen {
                    return Err(Error::MissingRoot);
                }
                break;
            }
            _ => {}
        }
    }

    debug!("linearized xml into {} path entries", state.entries.len());
    Ok(state.entries)
}

fn declared_aliases(root: &BytesStart<'_>) -> Result<Aliases> {
    let mut aliases = Aliases::new();
    for attr in root.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if let Some(PrefixDeclaration::Named(prefix)) = attr.key.as_namespace_binding() {
            let alias = std::str::from_utf8(prefix)?.to_string();
            aliases.insert(attr.value.to_vec(), alias);
        }
    }
    Ok(aliases)
}

fn qualified_name(reader: &NsReader<&[u8]>, e: &BytesStart<'_>, aliases: &Aliases) -> Result<String> {
    let (ns, local) = reader.resolve_element(e.name());
    let local = std::str::from_utf8(local.into_inner())?;
    let alias = match ns {
        ResolveResult::Bound(ns) => aliases.get(ns.into_inner()),
        _ => None,
    };
    Ok(match alias {
        Some(alias) => format!("{}{}{}", alias, XML_NAMESPACE_SEPARATOR, local),
        None => local.to_string(),
    })
}

/// Rebuilds nested maps from path entries.
///
/// The first segment of every path names the root element and is dropped.
/// Intermediate segments become maps, created on first use, and the last
/// segment receives the text as a string value. A path made of the root
/// segment alone is stored under that segment.
///
/// # Examples
///
/// ```rust
/// use serde_flat::xml::{expand, PathEntries};
/// use serde_flat::Value;
///
/// let mut entries = PathEntries::new();
/// entries.insert("d>object>a".to_string(), "b".to_string());
/// entries.insert("d>string".to_string(), "Hello".to_string());
///
/// let doc = expand(entries);
/// let object = doc.get("object").and_then(Value::as_object).unwrap();
/// assert_eq!(object.get("a"), Some(&Value::from("b")));
/// assert_eq!(doc.get("string"), Some(&Value::from("Hello")));
/// ```
#[must_use]
pub fn expand(entries: PathEntries) -> Map {
    let mut out = Map::new();
    'entries: for (path, text) in entries {
        let segments: Vec<&str> = path.split(XML_LEVEL_SEPARATOR).collect();
        let Some((leaf, parents)) = segments.split_last() else {
            continue;
        };
        let parents = parents.get(1..).unwrap_or(&[]);

        let mut node = &mut out;
        for segment in parents {
            let Some(child) = descend(node, segment) else {
                continue 'entries;
            };
            node = child;
        }
        node.insert((*leaf).to_string(), Value::String(text));
    }
    out
}

fn descend<'a>(node: &'a mut Map, segment: &str) -> Option<&'a mut Map> {
    let child = node
        .entry(segment.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !child.is_object() {
        debug!("path segment {:?} was a leaf, replacing it with a map", segment);
        *child = Value::Object(Map::new());
    }
    child.as_object_mut()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linearize_records_leaves_only() {
        let entries = linearize("<d><o><a>b</a><c>d</c></o><s>x</s></d>").unwrap();
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["d>o>a", "d>o>c", "d>s"]);
    }

    #[test]
    fn test_linearize_self_closing_leaf() {
        let entries = linearize("<d><empty/><also></also></d>").unwrap();
        assert_eq!(entries.get("d>empty").map(String::as_str), Some(""));
        assert_eq!(entries.get("d>also").map(String::as_str), Some(""));
    }

    #[test]
    fn test_linearize_root_without_children() {
        assert!(linearize("<d>text</d>").unwrap().is_empty());
        assert!(linearize("<d/>").unwrap().is_empty());
    }

    #[test]
    fn test_linearize_text_forms() {
        let entries =
            linearize("<d><a>1 &lt; 2</a><b>&#65;&#x42;</b><c><![CDATA[<raw>]]></c></d>").unwrap();
        assert_eq!(entries.get("d>a").map(String::as_str), Some("1 < 2"));
        assert_eq!(entries.get("d>b").map(String::as_str), Some("AB"));
        assert_eq!(entries.get("d>c").map(String::as_str), Some("<raw>"));
    }

    #[test]
    fn test_linearize_namespace_alias() {
        let xml = r#"<root xmlns:hyp="urn:hyp"><hyp:number>123</hyp:number><x:other xmlns:x="urn:x">1</x:other></root>"#;
        let entries = linearize(xml).unwrap();
        assert_eq!(entries.get("root>hyp:number").map(String::as_str), Some("123"));
        // Only declarations on the root element are used as aliases.
        assert_eq!(entries.get("root>other").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_linearize_default_namespace_keeps_local_name() {
        let entries = linearize(r#"<d xmlns="urn:default"><a>1</a></d>"#).unwrap();
        assert_eq!(entries.get("d>a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_linearize_stops_at_root_end() {
        let entries = linearize("<d><a>1</a></d>").unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_linearize_missing_root() {
        assert!(matches!(linearize(""), Err(Error::MissingRoot)));
        assert!(matches!(
            linearize("<?xml version=\"1.0\"?><!-- nothing -->"),
            Err(Error::MissingRoot)
        ));
    }

    #[test]
    fn test_linearize_mismatched_tags() {
        assert!(matches!(linearize("<d><a>1</b></d>"), Err(Error::Xml(_))));
    }

    #[test]
    fn test_expand_single_segment() {
        let mut entries = PathEntries::new();
        entries.insert("d".to_string(), "v".to_string());
        let out = expand(entries);
        assert_eq!(out.get("d"), Some(&Value::from("v")));
    }

    #[test]
    fn test_expand_shared_prefix() {
        let mut entries = PathEntries::new();
        entries.insert("d>o>a".to_string(), "1".to_string());
        entries.insert("d>o>b".to_string(), "2".to_string());
        let out = expand(entries);
        let o = out.get("o").and_then(Value::as_object).unwrap();
        assert_eq!(o.len(), 2);
    }
}
