//! Canonicalize command implementation.

use serde_json::Value;
use svt_canonical::Canonicalizer;

use crate::input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let canonicalizer = Canonicalizer::default();

    let json_str = input::read_file_or_stdin(input.as_deref())?;

    let value: Value =
        serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;

    let bytes = canonicalizer
        .canonicalize_value(&value)
        .map_err(|e| format!("Canonicalization failed: {}", e))?;

    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}
