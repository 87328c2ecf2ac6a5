//! Claim model for Signed Validation Tokens.
//!
//! A token's payload is a [`TokenClaimSet`]: the registered JWT claims plus a
//! `sig_val_claims` object ([`SvtClaims`]) holding one [`SignatureClaims`]
//! record per validated signature. Field names are the wire names; the
//! serialized form of these types is exactly what gets canonicalized and signed.

#![deny(missing_docs)]

pub mod policy;
pub mod signature;
pub mod svt;
pub mod token;

pub use policy::{PolicyValidationClaims, TimeValidationClaims, ValidationConclusion};
pub use signature::{
    CertRef, CertRefType, CertReferenceClaims, SigReferenceClaims, SignatureClaims,
    SignedDataClaims,
};
pub use svt::{SvtClaims, SvtProfile, SVT_VERSION};
pub use token::TokenClaimSet;

/// Free-form extension claims (`ext`).
pub type Extensions = std::collections::BTreeMap<String, String>;
