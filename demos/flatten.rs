//! Flattening a JSON document with an ignore list.
//!
//! Run with: cargo run --example flatten

use serde_flat::from_json_str;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_json_str(
        r#"{
            "profile": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "contact": { "email": "ada@example.com", "phone": "555-0100" }
            }
        }"#,
    )?;

    // Every key shares "profile_", which is trimmed.
    if let Some(flat) = doc.flatten(&[]) {
        println!("Flat keys:");
        for (key, value) in &flat {
            println!("  {} = {}", key, value);
        }
    }

    // The phone number and everything under it are left out.
    if let Some(flat) = doc.flatten(&[&["profile", "contact", "phone"]]) {
        println!("\nWithout phone:");
        for (key, value) in &flat {
            println!("  {} = {}", key, value);
        }
        assert!(!flat.contains_key("contact_phone"));
    }

    // An absent document has nothing to flatten.
    assert!(from_json_str("null")?.flatten(&[]).is_none());
    println!("\n✓ null payload flattens to nothing");

    Ok(())
}
