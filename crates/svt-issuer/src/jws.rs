//! JWS compact signing primitive.
//!
//! A token is `b64url(header) "." b64url(payload) "." b64url(signature)`,
//! where header and payload are canonical JSON bytes. The signature input is
//! the ASCII text before the last dot, as RFC 7515 prescribes.

use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use sha2::digest::const_oid::AssociatedOid;
use sha2::digest::{Digest, FixedOutputReset};
use sha2::{Sha256, Sha384, Sha512};
use signature::{RandomizedSigner, SignatureEncoding, Signer, Verifier};
use svt_canonical::{encoding, Canonicalizer};

use crate::algorithm::JwsAlgorithm;
use crate::errors::{SignError, TokenError};
use crate::keys::{KeyMaterial, SigningKey, VerifyingKey};

/// Media type placed in `typ`.
pub const TOKEN_TYPE: &str = "JWT";

/// Protected JOSE header of an SVT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoseHeader {
    /// Signing algorithm.
    pub alg: JwsAlgorithm,
    /// Token media type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Signer certificate chain, standard base64 DER, leaf first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x5c: Option<Vec<String>>,
    /// Base64url SHA-256 thumbprint of the signer certificate.
    #[serde(
        rename = "x5t#S256",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x5t_s256: Option<String>,
}

/// Output of a [`TokenSigner`].
#[derive(Debug, Clone)]
pub struct CompactJws {
    /// Header that was signed.
    pub header: JoseHeader,
    /// Serialized token.
    pub compact: String,
}

/// Signs canonical payload bytes into a compact token.
pub trait TokenSigner: Send + Sync {
    /// Signs `payload` with `key`.
    ///
    /// With `include_chain` the header embeds the full certificate chain
    /// (`x5c`); otherwise it carries only the leaf thumbprint (`x5t#S256`).
    fn sign(
        &self,
        key: &KeyMaterial,
        algorithm: JwsAlgorithm,
        payload: &[u8],
        include_chain: bool,
    ) -> Result<CompactJws, SignError>;
}

/// Default [`TokenSigner`] backed by the RustCrypto RSA and ECDSA crates.
///
/// All backend state lives in this value; nothing is registered globally.
#[derive(Debug, Clone, Default)]
pub struct JwsSigner {
    canonicalizer: Canonicalizer,
}

impl JwsSigner {
    /// Signer using the default canonicalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signer using `canonicalizer` for header bytes.
    pub fn with_canonicalizer(canonicalizer: Canonicalizer) -> Self {
        Self { canonicalizer }
    }
}

impl TokenSigner for JwsSigner {
    fn sign(
        &self,
        key: &KeyMaterial,
        algorithm: JwsAlgorithm,
        payload: &[u8],
        include_chain: bool,
    ) -> Result<CompactJws, SignError> {
        let header = JoseHeader {
            alg: algorithm,
            typ: Some(TOKEN_TYPE.to_string()),
            x5c: include_chain.then(|| key.chain_base64()),
            x5t_s256: (!include_chain).then(|| key.leaf_thumbprint()),
        };
        let header_bytes = self.canonicalizer.canonicalize(&header)?;

        let mut compact = encoding::b64url_encode(&header_bytes);
        compact.push('.');
        compact.push_str(&encoding::b64url_encode(payload));

        let signature = sign_bytes(algorithm, key.key(), compact.as_bytes())?;
        compact.push('.');
        compact.push_str(&encoding::b64url_encode(&signature));

        Ok(CompactJws { header, compact })
    }
}

/// Computes a raw JWS signature over `message`.
///
/// ECDSA signatures are the fixed-width `r || s` form JWS requires.
pub fn sign_bytes(
    algorithm: JwsAlgorithm,
    key: &SigningKey,
    message: &[u8],
) -> Result<Vec<u8>, SignError> {
    let incompatible = || SignError::IncompatibleKey {
        algorithm,
        family: key.family(),
    };
    match (algorithm, key) {
        (JwsAlgorithm::Rs256, SigningKey::Rsa(k)) => rsa_pkcs1_sign::<Sha256>(k, message),
        (JwsAlgorithm::Rs384, SigningKey::Rsa(k)) => rsa_pkcs1_sign::<Sha384>(k, message),
        (JwsAlgorithm::Rs512, SigningKey::Rsa(k)) => rsa_pkcs1_sign::<Sha512>(k, message),
        (JwsAlgorithm::Ps256, SigningKey::Rsa(k)) => rsa_pss_sign::<Sha256>(k, message),
        (JwsAlgorithm::Ps384, SigningKey::Rsa(k)) => rsa_pss_sign::<Sha384>(k, message),
        (JwsAlgorithm::Ps512, SigningKey::Rsa(k)) => rsa_pss_sign::<Sha512>(k, message),
        (JwsAlgorithm::Es256, SigningKey::P256(k)) => {
            let signer = p256::ecdsa::SigningKey::from(k);
            let sig: p256::ecdsa::Signature = signer.try_sign(message)?;
            Ok(sig.to_vec())
        }
        (JwsAlgorithm::Es384, SigningKey::P384(k)) => {
            let signer = p384::ecdsa::SigningKey::from(k);
            let sig: p384::ecdsa::Signature = signer.try_sign(message)?;
            Ok(sig.to_vec())
        }
        (JwsAlgorithm::Es512, SigningKey::P521(k)) => {
            let signer = p521::ecdsa::SigningKey::from_bytes(&k.to_bytes())?;
            let sig: p521::ecdsa::Signature = signer.try_sign(message)?;
            Ok(sig.to_vec())
        }
        (JwsAlgorithm::Es256 | JwsAlgorithm::Es384 | JwsAlgorithm::Es512, _) => {
            match key.curve() {
                Some(curve) => Err(SignError::CurveMismatch { algorithm, curve }),
                None => Err(incompatible()),
            }
        }
        _ => Err(incompatible()),
    }
}

/// Checks a raw JWS signature over `message`.
pub fn verify_bytes(
    algorithm: JwsAlgorithm,
    key: &VerifyingKey,
    message: &[u8],
    signature: &[u8],
) -> Result<(), TokenError> {
    let bad = |_: signature::Error| TokenError::BadSignature;
    match (algorithm, key) {
        (JwsAlgorithm::Rs256, VerifyingKey::Rsa(k)) => {
            rsa_pkcs1_verify::<Sha256>(k, message, signature)
        }
        (JwsAlgorithm::Rs384, VerifyingKey::Rsa(k)) => {
            rsa_pkcs1_verify::<Sha384>(k, message, signature)
        }
        (JwsAlgorithm::Rs512, VerifyingKey::Rsa(k)) => {
            rsa_pkcs1_verify::<Sha512>(k, message, signature)
        }
        (JwsAlgorithm::Ps256, VerifyingKey::Rsa(k)) => {
            rsa_pss_verify::<Sha256>(k, message, signature)
        }
        (JwsAlgorithm::Ps384, VerifyingKey::Rsa(k)) => {
            rsa_pss_verify::<Sha384>(k, message, signature)
        }
        (JwsAlgorithm::Ps512, VerifyingKey::Rsa(k)) => {
            rsa_pss_verify::<Sha512>(k, message, signature)
        }
        (JwsAlgorithm::Es256, VerifyingKey::P256(k)) => {
            let sig = p256::ecdsa::Signature::from_slice(signature).map_err(bad)?;
            p256::ecdsa::VerifyingKey::from(k)
                .verify(message, &sig)
                .map_err(bad)
        }
        (JwsAlgorithm::Es384, VerifyingKey::P384(k)) => {
            let sig = p384::ecdsa::Signature::from_slice(signature).map_err(bad)?;
            p384::ecdsa::VerifyingKey::from(k)
                .verify(message, &sig)
                .map_err(bad)
        }
        (JwsAlgorithm::Es512, VerifyingKey::P521(k)) => {
            let sig = p521::ecdsa::Signature::from_slice(signature).map_err(bad)?;
            p521::ecdsa::VerifyingKey::from_affine(*k.as_affine())
                .map_err(bad)?
                .verify(message, &sig)
                .map_err(bad)
        }
        _ => Err(TokenError::KeyMismatch {
            algorithm,
            family: key.family(),
        }),
    }
}

fn rsa_pkcs1_sign<D>(key: &RsaPrivateKey, message: &[u8]) -> Result<Vec<u8>, SignError>
where
    D: Digest + AssociatedOid,
{
    let signer = rsa::pkcs1v15::SigningKey::<D>::new(key.clone());
    Ok(signer.try_sign(message)?.to_vec())
}

fn rsa_pss_sign<D>(key: &RsaPrivateKey, message: &[u8]) -> Result<Vec<u8>, SignError>
where
    D: Digest + FixedOutputReset,
{
    let signer = rsa::pss::BlindedSigningKey::<D>::new(key.clone());
    Ok(signer.try_sign_with_rng(&mut OsRng, message)?.to_vec())
}

fn rsa_pkcs1_verify<D>(
    key: &RsaPublicKey,
    message: &[u8],
    signature: &[u8],
) -> Result<(), TokenError>
where
    D: Digest + AssociatedOid,
{
    let sig =
        rsa::pkcs1v15::Signature::try_from(signature).map_err(|_| TokenError::BadSignature)?;
    rsa::pkcs1v15::VerifyingKey::<D>::new(key.clone())
        .verify(message, &sig)
        .map_err(|_| TokenError::BadSignature)
}

fn rsa_pss_verify<D>(
    key: &RsaPublicKey,
    message: &[u8],
    signature: &[u8],
) -> Result<(), TokenError>
where
    D: Digest + FixedOutputReset,
{
    let sig = rsa::pss::Signature::try_from(signature).map_err(|_| TokenError::BadSignature)?;
    rsa::pss::VerifyingKey::<D>::new(key.clone())
        .verify(message, &sig)
        .map_err(|_| TokenError::BadSignature)
}
