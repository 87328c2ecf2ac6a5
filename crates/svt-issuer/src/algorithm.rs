//! Signing algorithm policy.
//!
//! Maps each JWS algorithm to the key family it needs and rejects anything
//! outside the supported RSA, RSA-PSS and ECDSA set before an issuer exists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use svt_canonical::HashAlgorithm;

use crate::errors::ConfigError;
use crate::keys::SigningKey;

/// Registered JWS algorithm names.
///
/// The enumeration deliberately includes algorithms the issuer refuses
/// (`HS*`, `EdDSA`) so that a configured name always parses and the refusal
/// is reported as [`ConfigError::UnsupportedAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JwsAlgorithm {
    /// HMAC with SHA-256.
    Hs256,
    /// HMAC with SHA-384.
    Hs384,
    /// HMAC with SHA-512.
    Hs512,
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    Rs256,
    /// RSASSA-PKCS1-v1_5 with SHA-384.
    Rs384,
    /// RSASSA-PKCS1-v1_5 with SHA-512.
    Rs512,
    /// RSASSA-PSS with SHA-256.
    Ps256,
    /// RSASSA-PSS with SHA-384.
    Ps384,
    /// RSASSA-PSS with SHA-512.
    Ps512,
    /// ECDSA on P-256 with SHA-256.
    Es256,
    /// ECDSA on P-384 with SHA-384.
    Es384,
    /// ECDSA on P-521 with SHA-512.
    Es512,
    /// Edwards-curve signatures.
    #[serde(rename = "EdDSA")]
    EdDsa,
}

/// Algorithms accepted by [`AlgorithmBinding::validate`].
pub const SUPPORTED_ALGORITHMS: [JwsAlgorithm; 9] = [
    JwsAlgorithm::Rs256,
    JwsAlgorithm::Rs384,
    JwsAlgorithm::Rs512,
    JwsAlgorithm::Ps256,
    JwsAlgorithm::Ps384,
    JwsAlgorithm::Ps512,
    JwsAlgorithm::Es256,
    JwsAlgorithm::Es384,
    JwsAlgorithm::Es512,
];

const ALL_ALGORITHMS: [JwsAlgorithm; 13] = [
    JwsAlgorithm::Hs256,
    JwsAlgorithm::Hs384,
    JwsAlgorithm::Hs512,
    JwsAlgorithm::Rs256,
    JwsAlgorithm::Rs384,
    JwsAlgorithm::Rs512,
    JwsAlgorithm::Ps256,
    JwsAlgorithm::Ps384,
    JwsAlgorithm::Ps512,
    JwsAlgorithm::Es256,
    JwsAlgorithm::Es384,
    JwsAlgorithm::Es512,
    JwsAlgorithm::EdDsa,
];

impl JwsAlgorithm {
    /// JOSE `alg` name.
    pub const fn as_str(self) -> &'static str {
        match self {
            JwsAlgorithm::Hs256 => "HS256",
            JwsAlgorithm::Hs384 => "HS384",
            JwsAlgorithm::Hs512 => "HS512",
            JwsAlgorithm::Rs256 => "RS256",
            JwsAlgorithm::Rs384 => "RS384",
            JwsAlgorithm::Rs512 => "RS512",
            JwsAlgorithm::Ps256 => "PS256",
            JwsAlgorithm::Ps384 => "PS384",
            JwsAlgorithm::Ps512 => "PS512",
            JwsAlgorithm::Es256 => "ES256",
            JwsAlgorithm::Es384 => "ES384",
            JwsAlgorithm::Es512 => "ES512",
            JwsAlgorithm::EdDsa => "EdDSA",
        }
    }

    /// Key family the algorithm signs with, or `None` if unsupported.
    pub const fn required_family(self) -> Option<KeyFamily> {
        match self {
            JwsAlgorithm::Rs256 | JwsAlgorithm::Rs384 | JwsAlgorithm::Rs512 => Some(KeyFamily::Rsa),
            JwsAlgorithm::Ps256 | JwsAlgorithm::Ps384 | JwsAlgorithm::Ps512 => {
                Some(KeyFamily::RsaPss)
            }
            JwsAlgorithm::Es256 | JwsAlgorithm::Es384 | JwsAlgorithm::Es512 => {
                Some(KeyFamily::EllipticCurve)
            }
            JwsAlgorithm::Hs256 | JwsAlgorithm::Hs384 | JwsAlgorithm::Hs512 | JwsAlgorithm::EdDsa => {
                None
            }
        }
    }

    /// Digest the algorithm signs with, or `None` if unsupported.
    pub const fn hash_algorithm(self) -> Option<HashAlgorithm> {
        match self {
            JwsAlgorithm::Rs256 | JwsAlgorithm::Ps256 | JwsAlgorithm::Es256 => {
                Some(HashAlgorithm::Sha256)
            }
            JwsAlgorithm::Rs384 | JwsAlgorithm::Ps384 | JwsAlgorithm::Es384 => {
                Some(HashAlgorithm::Sha384)
            }
            JwsAlgorithm::Rs512 | JwsAlgorithm::Ps512 | JwsAlgorithm::Es512 => {
                Some(HashAlgorithm::Sha512)
            }
            JwsAlgorithm::Hs256 | JwsAlgorithm::Hs384 | JwsAlgorithm::Hs512 | JwsAlgorithm::EdDsa => {
                None
            }
        }
    }

    /// Curve an ECDSA algorithm is defined over.
    pub const fn curve(self) -> Option<EcCurve> {
        match self {
            JwsAlgorithm::Es256 => Some(EcCurve::P256),
            JwsAlgorithm::Es384 => Some(EcCurve::P384),
            JwsAlgorithm::Es512 => Some(EcCurve::P521),
            _ => None,
        }
    }
}

impl fmt::Display for JwsAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JwsAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ALGORITHMS
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

/// Key type an algorithm requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    /// RSA keys with PKCS#1 v1.5 padding.
    Rsa,
    /// RSA keys with PSS padding.
    RsaPss,
    /// Elliptic-curve keys.
    EllipticCurve,
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyFamily::Rsa => "RSA",
            KeyFamily::RsaPss => "RSA-PSS",
            KeyFamily::EllipticCurve => "EC",
        })
    }
}

/// Named curves accepted for ECDSA keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    /// NIST P-256.
    P256,
    /// NIST P-384.
    P384,
    /// NIST P-521.
    P521,
}

impl fmt::Display for EcCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EcCurve::P256 => "P-256",
            EcCurve::P384 => "P-384",
            EcCurve::P521 => "P-521",
        })
    }
}

/// An algorithm that passed the policy together with its key family.
///
/// Only [`AlgorithmBinding::validate`] creates one, so holding a binding is
/// proof that the algorithm is supported and the key family matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmBinding {
    algorithm: JwsAlgorithm,
    family: KeyFamily,
    hash: HashAlgorithm,
}

impl AlgorithmBinding {
    /// Checks `algorithm` against the supported set and the family of `key`.
    ///
    /// Curve compatibility for ECDSA is left to the signing primitive.
    pub fn validate(algorithm: JwsAlgorithm, key: &SigningKey) -> Result<Self, ConfigError> {
        let (family, hash) = match (algorithm.required_family(), algorithm.hash_algorithm()) {
            (Some(family), Some(hash)) => (family, hash),
            _ => return Err(ConfigError::UnsupportedAlgorithm(algorithm)),
        };
        if !key.supports(family) {
            return Err(ConfigError::KeyFamilyMismatch {
                algorithm,
                required: family,
                actual: key.family(),
            });
        }
        Ok(Self {
            algorithm,
            family,
            hash,
        })
    }

    /// Bound algorithm.
    pub fn algorithm(&self) -> JwsAlgorithm {
        self.algorithm
    }

    /// Family the algorithm requires.
    pub fn family(&self) -> KeyFamily {
        self.family
    }

    /// Digest used by the algorithm, also the evidence hash hint.
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash
    }
}
