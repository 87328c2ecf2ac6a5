//! Per-signature evidence records.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svt_canonical::{encoding, HashAlgorithm};

use crate::policy::{PolicyValidationClaims, TimeValidationClaims};
use crate::Extensions;

/// Reference to the validated signature (`sig_ref`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigReferenceClaims {
    /// Optional identifier of the signature element in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Base64 hash of the signature value bytes.
    pub sig_hash: String,
    /// Base64 hash of the signed bytes (e.g., SignedInfo, signed attributes).
    pub sb_hash: String,
}

/// Reference to data covered by the signature (`sig_data_ref` entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedDataClaims {
    /// Locator of the signed data (URI, XPath, or PDF byte range).
    #[serde(rename = "ref")]
    pub reference: String,
    /// Base64 hash of the referenced data.
    pub hash: String,
}

/// How a signer certificate is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertRefType {
    /// `ref` holds every certificate of the chain, base64 DER, leaf first.
    Chain,
    /// `ref` holds one base64 hash over the concatenated DER chain.
    ChainHash,
}

/// Hash-based or literal reference to the signer certificate chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertReferenceClaims {
    /// Reference type.
    #[serde(rename = "type")]
    pub ref_type: CertRefType,
    /// Reference values; meaning depends on `type`.
    #[serde(rename = "ref")]
    pub refs: Vec<String>,
}

impl CertReferenceClaims {
    /// Builds a `chain` reference carrying each DER certificate.
    pub fn chain<C: AsRef<[u8]>>(certificates: &[C]) -> Self {
        Self {
            ref_type: CertRefType::Chain,
            refs: certificates
                .iter()
                .map(|der| encoding::b64_encode(der.as_ref()))
                .collect(),
        }
    }

    /// Builds a `chain_hash` reference over the concatenated DER chain.
    pub fn chain_hash<C: AsRef<[u8]>>(certificates: &[C], alg: HashAlgorithm) -> Self {
        let parts: Vec<&[u8]> = certificates.iter().map(AsRef::as_ref).collect();
        Self {
            ref_type: CertRefType::ChainHash,
            refs: vec![alg.digest_parts(&parts).to_base64()],
        }
    }
}

/// Signer certificate reference state for one signature.
///
/// Only [`CertRef::Present`] reaches the wire. The other two states record
/// why a reference is missing so issuance can tell an intentional omission
/// from a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CertRef {
    /// Certificate referencing is switched off for this token.
    #[default]
    Disabled,
    /// The validator could not produce a reference.
    Unavailable {
        /// Why the reference could not be produced.
        reason: String,
    },
    /// A reference is available.
    Present(CertReferenceClaims),
}

impl CertRef {
    /// True unless a reference is present.
    pub fn is_absent(&self) -> bool {
        !matches!(self, CertRef::Present(_))
    }

    /// Borrows the reference, if present.
    pub fn claims(&self) -> Option<&CertReferenceClaims> {
        match self {
            CertRef::Present(claims) => Some(claims),
            _ => None,
        }
    }
}

impl From<CertReferenceClaims> for CertRef {
    fn from(claims: CertReferenceClaims) -> Self {
        CertRef::Present(claims)
    }
}

impl Serialize for CertRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.claims().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CertRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<CertReferenceClaims>::deserialize(deserializer)?
            .map_or(CertRef::Disabled, CertRef::Present))
    }
}

/// Validation evidence for one signature (`sig` entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureClaims {
    /// Reference to the signature itself.
    pub sig_ref: SigReferenceClaims,
    /// Data covered by the signature.
    pub sig_data_ref: Vec<SignedDataClaims>,
    /// Signer certificate reference.
    #[serde(default, skip_serializing_if = "CertRef::is_absent")]
    pub signer_cert_ref: CertRef,
    /// Policy validation outcomes.
    pub sig_val: Vec<PolicyValidationClaims>,
    /// Time validation evidence, possibly empty.
    #[serde(default)]
    pub time_val: Vec<TimeValidationClaims>,
    /// Extension claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extensions>,
}
