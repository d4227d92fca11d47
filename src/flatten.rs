//! Flattening of nested documents into a single-level namespace.
//!
//! Three steps turn a nested [`Map`] into a [`FlatMap`]:
//!
//! 1. **Key normalization**: every path is joined and rewritten in snake
//!    case, so `["object", "a"]` becomes `object_a` and `hyp:number`
//!    becomes `hyp_number`.
//! 2. **Tree flattening**: objects are walked recursively; ignored branches
//!    are pruned and every leaf (scalars, nulls and whole arrays) is emitted
//!    under its normalized key.
//! 3. **Prefix compression**: the longest leading segment shared by every
//!    key is stripped, as long as it ends on a `_` boundary.
//!
//! ```rust
//! use serde_flat::{flatten, value, Value};
//!
//! let doc = value!({ "geek": { "name": "Alice", "age": 42 } });
//! let flat = flatten::flatten(doc.as_object().unwrap(), &[]).unwrap();
//!
//! assert_eq!(flat.get("name"), Some(&Value::from("Alice")));
//! assert!(flat.get("age").is_some());
//! ```

use crate::{FlatMap, Map, Value};
use heck::ToSnakeCase;
use log::{debug, trace};
use std::collections::HashSet;

/// Joins raw path segments before normalization.
const LEVEL_SEPARATOR: &str = " ";

/// Separator between path levels once a key is normalized.
pub const KEY_SEPARATOR: char = '_';

/// Converts a path into its canonical flat key.
///
/// `prefix` is an already normalized key (or `""` at the top level) and
/// `segments` the raw names appended to it. Normalizing an already normalized
/// key returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use serde_flat::flatten::normalize_key;
///
/// assert_eq!(normalize_key("", &["object", "a"]), "object_a");
/// assert_eq!(normalize_key("object", &["firstName"]), "object_first_name");
/// assert_eq!(normalize_key("", &["hyp:number"]), "hyp_number");
/// ```
#[must_use]
pub fn normalize_key<S: AsRef<str>>(prefix: &str, segments: &[S]) -> String {
    let mut raw = String::from(prefix);
    for segment in segments {
        raw.push_str(LEVEL_SEPARATOR);
        raw.push_str(segment.as_ref());
    }
    raw.to_snake_case()
}

/// Flattens a nested map, skipping the ignored branches.
///
/// Each entry of `ignored` is a full branch path given as raw segments; the
/// branch and all of its descendants are left out. Arrays are leaves and are
/// never walked into.
///
/// Returns `None` for an empty input, so that "no document" stays distinct
/// from "a document whose keys were all ignored".
///
/// # Examples
///
/// ```rust
/// use serde_flat::{flatten, value, Value};
///
/// let doc = value!({ "object": { "a": "b", "c": "d" } });
/// let flat = flatten::flatten(doc.as_object().unwrap(), &[&["object", "c"]]).unwrap();
///
/// assert_eq!(flat.len(), 1);
/// assert_eq!(flat.get("object_a"), Some(&Value::from("b")));
/// ```
#[must_use]
pub fn flatten(input: &Map, ignored: &[&[&str]]) -> Option<FlatMap> {
    if input.is_empty() {
        return None;
    }
    let ignored: HashSet<String> = ignored
        .iter()
        .copied()
        .map(|path| normalize_key("", path))
        .collect();

    let mut out = Map::with_capacity(input.len());
    flatten_into(input, &ignored, "", &mut out);
    debug!("flattened document into {} keys", out.len());
    Some(simplify(out))
}

fn flatten_into(input: &Map, ignored: &HashSet<String>, root: &str, out: &mut FlatMap) {
    for (k, v) in input {
        let key = normalize_key(root, &[k]);
        if ignored.contains(&key) {
            trace!("skipping ignored branch {}", key);
            continue;
        }
        match v {
            Value::Object(child) => flatten_into(child, ignored, &key, out),
            leaf => {
                if out.insert(key, leaf.clone()).is_some() {
                    debug!("normalized key collision under {:?}, last value wins", k);
                }
            }
        }
    }
}

/// Strips the longest segment-aligned prefix shared by every key.
///
/// Maps with fewer than two entries are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use serde_flat::{flatten::simplify, Map, Value};
///
/// let map: Map = vec![
///     ("geek_name".to_string(), Value::from("Alice")),
///     ("geek_age".to_string(), Value::from(42.0)),
/// ]
/// .into_iter()
/// .collect();
///
/// let out = simplify(map);
/// assert!(out.contains_key("name"));
/// assert!(out.contains_key("age"));
/// ```
#[must_use]
pub fn simplify(input: FlatMap) -> FlatMap {
    let Some(prefix) = common_prefix(&input) else {
        return input;
    };
    debug!("trimming common key prefix {:?}", prefix);
    input
        .into_iter()
        .map(|(k, v)| match k.strip_prefix(prefix.as_str()) {
            Some(rest) => (rest.to_string(), v),
            None => (k, v),
        })
        .collect()
}

/// Returns the longest prefix shared by all keys when it ends with
/// [`KEY_SEPARATOR`].
///
/// The common prefix of a sorted set equals the common prefix of its first
/// and last elements, so only those two keys are compared.
///
/// # Examples
///
/// ```rust
/// use serde_flat::{flatten::common_prefix, Map, Value};
///
/// let keys = |names: &[&str]| -> Map {
///     names.iter().map(|n| (n.to_string(), Value::Null)).collect()
/// };
///
/// assert_eq!(common_prefix(&keys(&["geek_name", "geek_age"])), Some("geek_".to_string()));
/// assert_eq!(common_prefix(&keys(&["geek1", "geek2"])), None);
/// ```
#[must_use]
pub fn common_prefix(input: &Map) -> Option<String> {
    if input.len() <= 1 {
        return None;
    }
    let mut keys: Vec<&str> = input.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let (first, last) = (keys.first()?, keys.last()?);

    let mut cut = 0;
    let mut boundary = None;
    for (a, b) in first.chars().zip(last.chars()) {
        if a != b {
            break;
        }
        cut += a.len_utf8();
        boundary = Some(a);
    }
    if boundary == Some(KEY_SEPARATOR) {
        Some(first[..cut].to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    fn keys(names: &[&str]) -> Map {
        names
            .iter()
            .map(|n| (n.to_string(), Value::from("value")))
            .collect()
    }

    fn sorted_keys(map: &Map) -> Vec<String> {
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("", &["object"]), "object");
        assert_eq!(normalize_key("object", &["c"]), "object_c");
        assert_eq!(normalize_key("", &["object", "c"]), "object_c");
        assert_eq!(normalize_key("", &["Hello World"]), "hello_world");
    }

    #[test]
    fn test_normalize_key_is_idempotent() {
        let once = normalize_key("", &["Some Key", "innerValue"]);
        assert_eq!(normalize_key("", &[once.as_str()]), once);
    }

    #[test]
    fn test_simplify_short() {
        assert_eq!(simplify(Map::new()), Map::new());
        assert_eq!(simplify(keys(&["key"])), keys(&["key"]));
    }

    #[test]
    fn test_simplify_common_part_inside_names() {
        let out = simplify(keys(&["geek1", "geek2"]));
        assert_eq!(sorted_keys(&out), vec!["geek1", "geek2"]);
    }

    #[test]
    fn test_simplify_partial_prefix() {
        let input = keys(&["array", "object_a", "object_c", "object_e", "string"]);
        assert_eq!(simplify(input.clone()), input);
    }

    #[test]
    fn test_simplify_ok() {
        let mut input = Map::new();
        input.insert("geek_name".to_string(), Value::from("value"));
        input.insert("geek_age".to_string(), Value::from(42.0));

        let out = simplify(input);
        assert_eq!(out.get("name"), Some(&Value::from("value")));
        assert_eq!(out.get("age"), Some(&Value::from(42.0)));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_common_prefix_stops_on_longest_match() {
        // "a_b" is shared but does not end on a separator.
        assert_eq!(common_prefix(&keys(&["a_bc", "a_bd"])), None);
        assert_eq!(
            common_prefix(&keys(&["a_b_x", "a_b_y", "a_b_z"])),
            Some("a_b_".to_string())
        );
    }

    #[test]
    fn test_flatten_empty_is_none() {
        assert!(flatten(&Map::new(), &[]).is_none());
    }

    #[test]
    fn test_flatten_all_ignored_is_empty_but_present() {
        let doc = value!({ "a": 1 });
        let out = flatten(doc.as_object().unwrap(), &[&["a"]]);
        assert_eq!(out, Some(Map::new()));
    }

    #[test]
    fn test_flatten_arrays_are_leaves() {
        let doc = value!({ "list": [{ "a": 1 }], "n": null });
        let out = flatten(doc.as_object().unwrap(), &[]).unwrap();
        assert_eq!(sorted_keys(&out), vec!["list", "n"]);
        assert!(out.get("list").map(Value::is_array).unwrap_or(false));
    }

    #[test]
    fn test_flatten_ignores_whole_branch() {
        let doc = value!({
            "object": { "a": "b", "nested": { "x": 1, "y": 2 } },
            "other": "z"
        });
        let out = flatten(doc.as_object().unwrap(), &[&["object", "nested"]]).unwrap();
        assert_eq!(sorted_keys(&out), vec!["object_a", "other"]);
    }

    #[test]
    fn test_flatten_single_survivor_keeps_prefix() {
        let doc = value!({ "object": { "a": "b", "c": "d" } });
        let out = flatten(doc.as_object().unwrap(), &[&["object", "c"]]).unwrap();
        assert_eq!(out.get("object_a"), Some(&Value::from("b")));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_flatten_collision_last_write_wins() {
        let doc = value!({ "a b": 1, "a": { "b": 2 } });
        let out = flatten(doc.as_object().unwrap(), &[]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.get("a_b"), Some(&Value::from(2)));
    }
}
