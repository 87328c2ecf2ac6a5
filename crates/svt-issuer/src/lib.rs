//! Issuance engine for Signed Validation Tokens.
//!
//! An [`SvtIssuer`] combines:
//! - a [`SignatureValidator`] that turns a signed document into evidence
//! - an [`AlgorithmBinding`] proving the algorithm fits the signing key
//! - a [`TokenSigner`] producing the compact JWS
//!
//! Core invariants:
//! - Unsupported algorithms and key family mismatches fail at construction
//! - Every token gets a fresh 160-bit id and a whole-second `iat`
//! - `exp` is present exactly when the profile sets a validity period
//! - The signed payload is the canonical encoding of the returned claim set
//! - A failed `issue` returns an error and never a partial token
//!
#![deny(missing_docs)]

/// Signing algorithm policy.
pub mod algorithm;
/// Error types for issuance and token handling.
pub mod errors;
/// Token assembler.
pub mod issuer;
/// JOSE header and JWS signing primitive.
pub mod jws;
/// Keys and certificate chains.
pub mod keys;
/// Signing profile.
pub mod profile;
/// Signed token decoding and verification.
pub mod token;
/// Token id generation.
pub mod token_id;
/// Signature validation collaborator.
pub mod validator;
/// Validity window computation.
pub mod validity;

pub use algorithm::{AlgorithmBinding, EcCurve, JwsAlgorithm, KeyFamily, SUPPORTED_ALGORITHMS};
pub use errors::{
    ConfigError, EvidenceError, IssueError, SignError, TokenError, VerificationError,
};
pub use issuer::SvtIssuer;
pub use jws::{CompactJws, JoseHeader, JwsSigner, TokenSigner};
pub use keys::{KeyMaterial, SigningKey, VerifyingKey};
pub use profile::{SigningProfile, SigningProfileBuilder};
pub use token::SignedToken;
pub use token_id::new_token_id;
pub use validator::{PrecomputedEvidence, SignatureValidator};
pub use validity::Validity;
