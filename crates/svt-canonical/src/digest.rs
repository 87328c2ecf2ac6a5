use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256, Sha384, Sha512};

use crate::encoding;
use crate::validation::ValidationError;

/// Hash algorithms used for SVT evidence and signing.
///
/// Serialized as the XML digest-method URI, which is how the `hash_algo`
/// claim names the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256.
    #[serde(rename = "http://www.w3.org/2001/04/xmlenc#sha256")]
    Sha256,
    /// SHA-384.
    #[serde(rename = "http://www.w3.org/2001/04/xmldsig-more#sha384")]
    Sha384,
    /// SHA-512.
    #[serde(rename = "http://www.w3.org/2001/04/xmlenc#sha512")]
    Sha512,
}

impl HashAlgorithm {
    /// XML digest-method URI for this algorithm.
    pub const fn uri(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "http://www.w3.org/2001/04/xmlenc#sha256",
            HashAlgorithm::Sha384 => "http://www.w3.org/2001/04/xmldsig-more#sha384",
            HashAlgorithm::Sha512 => "http://www.w3.org/2001/04/xmlenc#sha512",
        }
    }

    /// Resolves an algorithm from its digest-method URI.
    pub fn from_uri(uri: &str) -> Result<Self, ValidationError> {
        [Self::Sha256, Self::Sha384, Self::Sha512]
            .into_iter()
            .find(|alg| alg.uri() == uri)
            .ok_or_else(|| ValidationError::PatternMismatch {
                field: "hash_algo",
                value: uri.to_string(),
            })
    }

    /// Output length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Hashes `data` with this algorithm.
    pub fn digest(self, data: &[u8]) -> Digest {
        self.digest_parts(&[data])
    }

    /// Hashes the concatenation of `parts` without copying them together.
    pub fn digest_parts(self, parts: &[&[u8]]) -> Digest {
        let bytes = match self {
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                parts.iter().for_each(|p| hasher.update(p));
                hasher.finalize().to_vec()
            }
            HashAlgorithm::Sha384 => {
                let mut hasher = Sha384::new();
                parts.iter().for_each(|p| hasher.update(p));
                hasher.finalize().to_vec()
            }
            HashAlgorithm::Sha512 => {
                let mut hasher = Sha512::new();
                parts.iter().for_each(|p| hasher.update(p));
                hasher.finalize().to_vec()
            }
        };
        Digest { alg: self, bytes }
    }
}

/// Algorithm + digest bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    alg: HashAlgorithm,
    bytes: Vec<u8>,
}

impl Digest {
    /// Wraps existing digest bytes, checking the length against the algorithm.
    pub fn new(alg: HashAlgorithm, bytes: Vec<u8>) -> Result<Self, ValidationError> {
        if bytes.len() != alg.output_len() {
            return Err(ValidationError::OutOfBounds {
                field: "digest",
                value: bytes.len().to_string(),
            });
        }
        Ok(Digest { alg, bytes })
    }

    /// Algorithm that produced the digest.
    pub fn alg(&self) -> HashAlgorithm {
        self.alg
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Standard base64 with padding, the encoding used inside SVT claims.
    pub fn to_base64(&self) -> String {
        encoding::b64_encode(&self.bytes)
    }

    /// Base64url without padding, the encoding used by JOSE headers.
    pub fn to_base64url(&self) -> String {
        encoding::b64url_encode(&self.bytes)
    }
}
