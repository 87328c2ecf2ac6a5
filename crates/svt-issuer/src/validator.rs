//! Signature validation collaborator.
//!
//! The issuer never checks document signatures itself. A
//! [`SignatureValidator`] for one document format does that and hands back
//! one [`SignatureClaims`] record per signature; the issuer only packages
//! and signs the result.

use serde::{Deserialize, Serialize};
use svt_canonical::HashAlgorithm;
use svt_claims::{SignatureClaims, SvtProfile};

use crate::errors::VerificationError;

/// Produces validation evidence for documents of one format.
pub trait SignatureValidator: Send + Sync {
    /// Document type accepted by [`verify`](Self::verify).
    type Document: ?Sized;

    /// Validates every signature in `document`.
    ///
    /// All hash values in the returned records must use `hash_algorithm`.
    /// Records are returned in document order.
    fn verify(
        &self,
        document: &Self::Document,
        hash_algorithm: HashAlgorithm,
    ) -> Result<Vec<SignatureClaims>, VerificationError>;

    /// Document format this validator handles.
    fn profile(&self) -> SvtProfile;
}

impl<V: SignatureValidator + ?Sized> SignatureValidator for &V {
    type Document = V::Document;

    fn verify(
        &self,
        document: &Self::Document,
        hash_algorithm: HashAlgorithm,
    ) -> Result<Vec<SignatureClaims>, VerificationError> {
        (**self).verify(document, hash_algorithm)
    }

    fn profile(&self) -> SvtProfile {
        (**self).profile()
    }
}

/// Evidence computed by an upstream validation service, replayed verbatim.
///
/// `hash_algo` names the algorithm every hash in `signatures` was computed
/// with; [`verify`](SignatureValidator::verify) fails unless it matches the
/// issuer's hash algorithm. When `document_sha256` is set, only documents
/// with that SHA-256 (standard base64) are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecomputedEvidence {
    /// Document format the evidence describes.
    pub profile: SvtProfile,
    /// Hash algorithm the evidence hashes were computed with.
    pub hash_algo: HashAlgorithm,
    /// Base64 SHA-256 of the document the evidence belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_sha256: Option<String>,
    /// Signature records.
    pub signatures: Vec<SignatureClaims>,
}

impl PrecomputedEvidence {
    /// Evidence for `profile` hashed with `hash_algo`, not pinned to a document.
    pub fn new(
        profile: SvtProfile,
        hash_algo: HashAlgorithm,
        signatures: Vec<SignatureClaims>,
    ) -> Self {
        Self {
            profile,
            hash_algo,
            document_sha256: None,
            signatures,
        }
    }

    /// Pins the evidence to the SHA-256 of `document`.
    pub fn bound_to(mut self, document: &[u8]) -> Self {
        self.document_sha256 = Some(HashAlgorithm::Sha256.digest(document).to_base64());
        self
    }
}

impl SignatureValidator for PrecomputedEvidence {
    type Document = [u8];

    fn verify(
        &self,
        document: &[u8],
        hash_algorithm: HashAlgorithm,
    ) -> Result<Vec<SignatureClaims>, VerificationError> {
        if let Some(expected) = &self.document_sha256 {
            if HashAlgorithm::Sha256.digest(document).to_base64() != *expected {
                return Err(VerificationError::DocumentMismatch);
            }
        }
        if self.hash_algo != hash_algorithm {
            return Err(VerificationError::HashAlgorithmMismatch {
                requested: hash_algorithm.uri().to_string(),
                available: self.hash_algo.uri().to_string(),
            });
        }
        Ok(self.signatures.clone())
    }

    fn profile(&self) -> SvtProfile {
        self.profile
    }
}
