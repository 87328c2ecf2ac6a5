//! Inspect command implementation.

use serde_json::json;
use svt_issuer::SignedToken;

use crate::{input, output};

pub fn run(token: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let compact = input::read_token(&token)?;
    let token = SignedToken::decode(&compact).map_err(|e| format!("Invalid token: {}", e))?;

    if json_output {
        let value = json!({
            "header": token.header(),
            "claims": token.claims(),
        });
        println!("{}", output::format_json(&value));
    } else {
        output::print_summary(&token);
    }
    Ok(())
}
