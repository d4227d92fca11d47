use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_flat::flatten::simplify;
use serde_flat::{from_json_str, from_xml_str, Document, Map, Value};

fn nested_document(width: usize) -> Document {
    let mut root = Map::new();
    for i in 0..width {
        let mut inner = Map::new();
        inner.insert("firstName".to_string(), Value::from(format!("user{}", i)));
        inner.insert("age".to_string(), Value::from(i as u64));
        inner.insert(
            "tags".to_string(),
            Value::Array(vec![Value::from("a"), Value::from("b")]),
        );
        root.insert(format!("user{}", i), Value::Object(inner));
    }
    let mut top = Map::new();
    top.insert("users".to_string(), Value::Object(root));
    Document::new(top)
}

fn benchmark_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for size in [10, 100, 1000].iter() {
        let doc = nested_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| black_box(doc).flatten(&[]))
        });
    }
    group.finish();
}

fn benchmark_flatten_ignored(c: &mut Criterion) {
    let doc = nested_document(100);

    c.bench_function("flatten_ignored", |b| {
        b.iter(|| black_box(&doc).flatten(&[&["users", "user1"], &["users", "user2"]]))
    });
}

fn benchmark_simplify(c: &mut Criterion) {
    let map: Map = (0..500)
        .map(|i| (format!("geek_profile_field{}", i), Value::Null))
        .collect();

    c.bench_function("simplify", |b| b.iter(|| simplify(black_box(map.clone()))));
}

fn benchmark_lookup(c: &mut Criterion) {
    let doc = nested_document(100);

    c.bench_function("lookup_u64", |b| {
        b.iter(|| black_box(&doc).u64(&["users", "user50", "age"]))
    });
}

fn benchmark_json_decode(c: &mut Criterion) {
    let json = nested_document(100).to_json_string().unwrap();

    c.bench_function("json_decode", |b| {
        b.iter(|| from_json_str(black_box(&json)))
    });
}

fn benchmark_xml_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("xml");
    let doc = nested_document(100);
    let xml = doc.to_xml_string().unwrap();

    group.bench_function("encode", |b| b.iter(|| black_box(&doc).to_xml_string()));
    group.bench_function("decode", |b| b.iter(|| from_xml_str(black_box(&xml))));
    group.finish();
}

criterion_group!(
    benches,
    benchmark_flatten,
    benchmark_flatten_ignored,
    benchmark_simplify,
    benchmark_lookup,
    benchmark_json_decode,
    benchmark_xml_roundtrip
);
criterion_main!(benches);
