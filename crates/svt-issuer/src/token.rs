//! Issued and decoded tokens.

use svt_canonical::{encoding, Canonicalizer};
use svt_claims::TokenClaimSet;

use crate::errors::TokenError;
use crate::jws::{self, CompactJws, JoseHeader};
use crate::keys::VerifyingKey;

/// A compact signed SVT with its decoded sections.
#[derive(Debug, Clone)]
pub struct SignedToken {
    compact: String,
    header: JoseHeader,
    claims: TokenClaimSet,
    payload: Vec<u8>,
}

impl SignedToken {
    pub(crate) fn from_signed(jws: CompactJws, claims: TokenClaimSet, payload: Vec<u8>) -> Self {
        Self {
            compact: jws.compact,
            header: jws.header,
            claims,
            payload,
        }
    }

    /// Parses a compact token without checking its signature.
    pub fn decode(compact: &str) -> Result<Self, TokenError> {
        let compact = compact.trim();
        let segments: Vec<&str> = compact.split('.').collect();
        let [header_b64, payload_b64, signature_b64] = segments[..] else {
            return Err(TokenError::Malformed(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        };

        let header_bytes = decode_segment("header", header_b64)?;
        let payload = decode_segment("payload", payload_b64)?;
        decode_segment("signature", signature_b64)?;

        let header: JoseHeader = serde_json::from_slice(&header_bytes)
            .map_err(|source| TokenError::Json {
                segment: "header",
                source,
            })?;
        let claims: TokenClaimSet =
            serde_json::from_slice(&payload).map_err(|source| TokenError::Json {
                segment: "payload",
                source,
            })?;

        Ok(Self {
            compact: compact.to_string(),
            header,
            claims,
            payload,
        })
    }

    /// Compact serialization.
    pub fn as_str(&self) -> &str {
        &self.compact
    }

    /// Protected header.
    pub fn header(&self) -> &JoseHeader {
        &self.header
    }

    /// Claim set.
    pub fn claims(&self) -> &TokenClaimSet {
        &self.claims
    }

    /// Payload bytes exactly as signed.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Checks the signature with `key`.
    pub fn verify_with(&self, key: &VerifyingKey) -> Result<(), TokenError> {
        let (signing_input, signature_b64) = self
            .compact
            .rsplit_once('.')
            .ok_or_else(|| TokenError::Malformed("missing signature segment".to_string()))?;
        let signature = decode_segment("signature", signature_b64)?;
        jws::verify_bytes(self.header.alg, key, signing_input.as_bytes(), &signature)
    }

    /// Checks the signature against the leaf of the embedded `x5c` chain.
    ///
    /// This proves integrity only; whether the chain is trusted is up to the
    /// caller.
    pub fn verify_embedded_chain(&self) -> Result<(), TokenError> {
        let leaf = self
            .header
            .x5c
            .as_ref()
            .and_then(|chain| chain.first())
            .ok_or(TokenError::NoEmbeddedChain)?;
        let der = encoding::b64_decode(leaf).map_err(|source| TokenError::Base64 {
            segment: "x5c",
            source,
        })?;
        self.verify_with(&VerifyingKey::from_certificate_der(&der)?)
    }

    /// Whether the payload is the canonical encoding of the claim set.
    pub fn is_canonical(&self) -> bool {
        Canonicalizer::default()
            .canonicalize(&self.claims)
            .is_ok_and(|bytes| bytes == self.payload)
    }
}

impl std::fmt::Display for SignedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.compact)
    }
}

fn decode_segment(segment: &'static str, data: &str) -> Result<Vec<u8>, TokenError> {
    encoding::b64url_decode(data).map_err(|source| TokenError::Base64 { segment, source })
}
