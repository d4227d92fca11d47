//! Encoding a document as XML and decoding it back.
//!
//! Run with: cargo run --example xml_roundtrip

use serde_flat::{from_xml_str, value, Document, Options};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let options = Options::new()
        .with_xml_name("custom")
        .with_xml_namespace("http://schemas.xmlsoap.org/soap/envelope/")
        .with_xml_attributes(vec![(
            "xmlns:xsi".to_string(),
            "http://www.w3.org/2001/XMLSchema-instance".to_string(),
        )]);

    let doc = Document::from_value_with_options(
        value!({
            "languages": { "fr": "French", "en": "English" },
            "codes": ["fr", "en"]
        }),
        options,
    )?;

    let xml = doc.to_xml_string()?;
    println!("XML output:\n{}\n", xml);

    // Arrays come back as their joined text.
    let back = from_xml_str(&xml)?;
    println!("codes after decoding: {}", back.string(&["codes"])?);
    assert_eq!(back.string(&["languages", "fr"])?, "French");

    // Namespace aliases declared on the root survive in flat keys.
    let ns = from_xml_str(r#"<root xmlns:hyp="hyp"><hyp:number>123</hyp:number></root>"#)?;
    if let Some(flat) = ns.flatten(&[]) {
        for (key, value) in &flat {
            println!("{} = {}", key, value);
        }
    }

    println!("✓ Round-trip successful");
    Ok(())
}
