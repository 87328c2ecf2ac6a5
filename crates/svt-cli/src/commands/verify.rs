//! Verify command implementation.

use chrono::Utc;
use serde_json::json;
use svt_issuer::{SignedToken, VerifyingKey};

use crate::{input, output};

pub fn run(
    token: String,
    cert: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let compact = input::read_token(&token)?;
    let token = SignedToken::decode(&compact).map_err(|e| format!("Invalid token: {}", e))?;

    let signature = match &cert {
        Some(path) => {
            let key = VerifyingKey::from_certificate_pem(&input::read_file(path)?)?;
            token.verify_with(&key)
        }
        None => token.verify_embedded_chain(),
    };
    let canonical = token.is_canonical();
    let expired = token.claims().is_expired_at(Utc::now().timestamp());
    let valid = signature.is_ok() && canonical && !expired;

    if json_output {
        let value = json!({
            "jti": token.claims().jti,
            "signature": match &signature {
                Ok(()) => "valid".to_string(),
                Err(e) => e.to_string(),
            },
            "canonical": canonical,
            "expired": expired,
            "valid": valid,
        });
        println!("{}", output::format_json(&value));
    } else {
        output::print_field("TOKEN", token.claims().jti.as_str());
        match &signature {
            Ok(()) => output::print_field("SIGNATURE", "ok"),
            Err(e) => output::print_field("SIGNATURE", &format!("FAILED ({})", e)),
        }
        output::print_field("CANONICAL", if canonical { "ok" } else { "FAILED" });
        output::print_field("EXPIRY", if expired { "EXPIRED" } else { "ok" });
    }

    if !valid {
        return Err("token verification failed".into());
    }
    Ok(())
}
