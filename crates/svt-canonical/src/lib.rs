//! Canonical data primitives for Signed Validation Tokens (SVTs).
//!
//! Every byte that an SVT signature covers is produced by this crate: the
//! RFC 8785 canonical JSON form of the JOSE header and of the claim set, the
//! digests that identify certificates, and the base64 encodings used on the
//! wire. Nothing here knows about keys or signing.
//!
#![deny(missing_docs)]

/// Canonicalization helpers for deterministic signing input.
pub mod canonicalizer;
/// Hash algorithms and digests.
pub mod digest;
/// Base64 helpers used by JOSE and the claim model.
pub mod encoding;
/// Validated identifier newtypes.
pub mod identifiers;
/// Validation helpers used by canonical types.
pub mod validation;

pub use canonicalizer::{CanonicalizationError, Canonicalizer};
pub use digest::{Digest, HashAlgorithm};
pub use identifiers::{IssuerId, TokenId};
pub use validation::ValidationError;
