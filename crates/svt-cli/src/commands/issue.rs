//! Issue command implementation.

use svt_issuer::{JwsAlgorithm, KeyMaterial, PrecomputedEvidence, SigningProfile, SvtIssuer};
use tracing::info;

use crate::input;

pub fn run(
    key_path: String,
    certs_path: String,
    alg: String,
    profile_path: String,
    evidence_path: String,
    document_path: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = KeyMaterial::from_pem(
        &input::read_file(&key_path)?,
        &input::read_file(&certs_path)?,
    )?;
    let algorithm: JwsAlgorithm = alg.parse()?;

    let profile: SigningProfile = serde_json::from_str(&input::read_file(&profile_path)?)
        .map_err(|e| format!("Invalid profile {}: {}", profile_path, e))?;
    let evidence: PrecomputedEvidence = serde_json::from_str(&input::read_file(&evidence_path)?)
        .map_err(|e| format!("Invalid evidence {}: {}", evidence_path, e))?;

    let document = match document_path {
        Some(path) => {
            std::fs::read(&path).map_err(|e| format!("Failed to read file {}: {}", path, e))?
        }
        None => Vec::new(),
    };

    let issuer = SvtIssuer::new(key, algorithm, evidence)?;
    let token = issuer.issue(document.as_slice(), &profile)?;
    info!(jti = %token.claims().jti, "issued token");

    println!("{}", token);
    Ok(())
}
