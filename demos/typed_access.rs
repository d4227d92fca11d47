//! Typed and lenient getters over a YAML document.
//!
//! Run with: cargo run --example typed_access

use serde_flat::from_yaml_str;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_yaml_str(
        "server:\n  host: localhost\n  port: \"8080\"\n  debug: \"T\"\n  since: 08/1983\nreplicas: 3\ntags: [edge, eu]\n",
    )?;

    println!("host     = {}", doc.string(&["server", "host"])?);
    println!("port     = {}", doc.u64(&["server", "port"])?);
    println!("debug    = {}", doc.bool(&["server", "debug"])?);
    println!("since    = {}", doc.time("%m/%Y", &["server", "since"])?);
    println!("replicas = {}", doc.i64(&["replicas"])?);
    println!("tags     = {:?}", doc.strings(&["tags"])?);

    match doc.u64(&["server", "missing"]) {
        Err(e) if e.is_not_found() => println!("missing  -> {}", e),
        other => println!("unexpected: {:?}", other),
    }
    match doc.string(&["server", "debug", "deeper"]) {
        Err(e) => println!("deeper   -> {}", e),
        Ok(v) => println!("unexpected: {}", v),
    }

    // Lenient getters fall back to zero values.
    println!("timeout  = {}", doc.should_u64(&["server", "timeout"]));
    println!("name     = {:?}", doc.should_string(&["name"]));

    Ok(())
}
