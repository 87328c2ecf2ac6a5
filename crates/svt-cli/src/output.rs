//! Output formatting utilities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use svt_claims::SignatureClaims;
use svt_issuer::SignedToken;

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Prints one `LABEL value` line.
pub fn print_field(label: &str, value: &str) {
    println!("{:<12} {}", label, value);
}

/// Prints the header, claims and one row per signature record.
pub fn print_summary(token: &SignedToken) {
    let header = token.header();
    let claims = token.claims();

    print_field("ALG", header.alg.as_str());
    if let Some(chain) = &header.x5c {
        print_field("X5C", &format!("{} certificate(s)", chain.len()));
    }
    if let Some(thumbprint) = &header.x5t_s256 {
        print_field("X5T#S256", thumbprint);
    }
    print_field("JTI", claims.jti.as_str());
    print_field("ISS", claims.iss.as_str());
    if let Some(sub) = &claims.sub {
        print_field("SUB", sub);
    }
    print_field("AUD", &claims.aud.join(", "));
    print_field("IAT", &format_time(claims.iat));
    print_field(
        "EXP",
        &claims.exp.map(format_time).unwrap_or_else(|| "never".to_string()),
    );
    print_field("PROFILE", claims.sig_val_claims.profile.as_str());
    print_field("HASH", claims.sig_val_claims.hash_algo.uri());

    println!();
    print_table_header();
    for (index, sig) in claims.sig_val_claims.sig.iter().enumerate() {
        println!("{}", format_table_row(index, sig));
    }
}

/// Formats a signature record as a table row.
pub fn format_table_row(index: usize, sig: &SignatureClaims) -> String {
    let (policy, result) = sig
        .sig_val
        .first()
        .map(|val| (val.pol.as_str(), wire_name(&val.res)))
        .unwrap_or(("?", "?".to_string()));
    let cert_ref = sig
        .signer_cert_ref
        .claims()
        .map(|claims| wire_name(&claims.ref_type))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:<5} {:<44} {:<13} {:<10} {}",
        index,
        truncate(policy, 44),
        result,
        cert_ref,
        sig.time_val.len()
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<5} {:<44} {:<13} {:<10} {}",
        "SIG", "POLICY", "RESULT", "CERT_REF", "TIME_VAL"
    );
    println!("{}", "-".repeat(84));
}

fn format_time(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}

fn wire_name<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(Value::String(name)) => name,
        _ => "?".to_string(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
