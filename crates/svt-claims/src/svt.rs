//! The `sig_val_claims` object.

use serde::{Deserialize, Serialize};
use svt_canonical::HashAlgorithm;

use crate::signature::SignatureClaims;
use crate::Extensions;

/// Version of the SVT claim format emitted by this crate.
pub const SVT_VERSION: &str = "1.0";

/// Document format whose signatures an SVT describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SvtProfile {
    /// XML documents with embedded XML signatures.
    Xml,
    /// PDF documents with PDF signatures.
    Pdf,
    /// JWS-signed payloads.
    Jws,
}

impl SvtProfile {
    /// Wire name of the profile.
    pub const fn as_str(self) -> &'static str {
        match self {
            SvtProfile::Xml => "XML",
            SvtProfile::Pdf => "PDF",
            SvtProfile::Jws => "JWS",
        }
    }
}

impl std::str::FromStr for SvtProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "XML" => Ok(SvtProfile::Xml),
            "PDF" => Ok(SvtProfile::Pdf),
            "JWS" => Ok(SvtProfile::Jws),
            other => Err(format!("unknown SVT profile '{}'", other)),
        }
    }
}

/// Signature validation claims carried in every SVT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvtClaims {
    /// Claim format version.
    pub ver: String,
    /// Document format profile.
    pub profile: SvtProfile,
    /// Hash algorithm used for every hash value in the claims.
    pub hash_algo: HashAlgorithm,
    /// One record per validated signature, in document order.
    pub sig: Vec<SignatureClaims>,
    /// Extension claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extensions>,
}

impl SvtClaims {
    /// Creates claims for the current format version.
    pub fn new(profile: SvtProfile, hash_algo: HashAlgorithm, sig: Vec<SignatureClaims>) -> Self {
        Self {
            ver: SVT_VERSION.to_string(),
            profile,
            hash_algo,
            sig,
            ext: None,
        }
    }
}
