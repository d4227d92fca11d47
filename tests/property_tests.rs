//! Property-based tests for flattening and prefix trimming.
//!
//! Documents are generated from lowercase ASCII names so that the generated
//! paths never collide after snake casing.

use proptest::prelude::*;
use serde_flat::flatten::{common_prefix, normalize_key, simplify};
use serde_flat::{Document, Map, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ]
}

fn name() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn tree() -> impl Strategy<Value = Map> {
    let nested = prop::collection::vec((name(), leaf()), 1..5)
        .prop_map(|entries| entries.into_iter().collect::<Map>());
    prop::collection::vec(
        (
            name(),
            prop_oneof![leaf(), nested.prop_map(Value::Object)],
        ),
        1..6,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

fn flat_keys() -> impl Strategy<Value = Map> {
    prop::collection::vec("[a-z]{1,3}(_[a-z]{1,3}){0,3}", 0..8).prop_map(|keys| {
        keys.into_iter()
            .map(|k| (k, Value::Null))
            .collect::<Map>()
    })
}

proptest! {
    #[test]
    fn prop_simplify_is_idempotent(map in flat_keys()) {
        let once = simplify(map);
        let twice = simplify(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_simplify_keeps_entry_count(map in flat_keys()) {
        let len = map.len();
        prop_assert_eq!(simplify(map).len(), len);
    }

    #[test]
    fn prop_common_prefix_ends_on_separator(map in flat_keys()) {
        if let Some(prefix) = common_prefix(&map) {
            prop_assert!(prefix.ends_with('_'));
            prop_assert!(map.keys().all(|k| k.starts_with(&prefix)));
        }
    }

    #[test]
    fn prop_normalize_key_is_idempotent(segments in prop::collection::vec("[a-zA-Z ]{1,8}", 1..4)) {
        let once = normalize_key("", &segments);
        prop_assert_eq!(normalize_key("", &[once.as_str()]), once.clone());
    }

    #[test]
    fn prop_ignored_branches_are_absent(map in tree()) {
        let doc = Document::new(map.clone());
        let Some(first) = map.keys().next().cloned() else {
            return Ok(());
        };

        let ignored: [&[&str]; 1] = [&[first.as_str()]];
        let out = doc.flatten(&ignored).unwrap();

        // Same as flattening a document that never had the branch.
        let rest: Map = map
            .iter()
            .filter(|(k, _)| **k != first)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let expected = Document::new(rest).flatten(&[]).unwrap_or_default();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn prop_xml_roundtrip_matches_direct_flatten(map in tree()) {
        let doc = Document::new(map);
        let xml = doc.to_xml_string().unwrap();
        let decoded = Document::from_xml_str(&xml).unwrap();

        let direct = doc.flatten(&[]).map(|flat| {
            flat.into_iter()
                .map(|(k, v)| {
                    let text = serde_flat::format::fmt_string(&v, "|");
                    (k, Value::from(text))
                })
                .collect::<Map>()
        });
        prop_assert_eq!(decoded.flatten(&[]), direct);
    }
}
