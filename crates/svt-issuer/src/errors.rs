use thiserror::Error;

use crate::algorithm::{EcCurve, JwsAlgorithm, KeyFamily};

/// Issuer construction and configuration failures.
///
/// These are detected before an issuer exists; an issuer that was built
/// successfully never reports them.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The algorithm is not one of the supported RSA, RSA-PSS or ECDSA algorithms.
    #[error("unsupported signing algorithm {0}")]
    UnsupportedAlgorithm(JwsAlgorithm),
    /// The algorithm name is not a registered JWS algorithm.
    #[error("unknown signing algorithm '{0}'")]
    UnknownAlgorithm(String),
    /// The private key belongs to the wrong key family for the algorithm.
    #[error("{algorithm} requires a {required} key, got {actual}")]
    KeyFamilyMismatch {
        /// Requested algorithm.
        algorithm: JwsAlgorithm,
        /// Family the algorithm requires.
        required: KeyFamily,
        /// Family of the supplied key.
        actual: KeyFamily,
    },
    /// The private key could not be decoded or is of an unsupported type.
    #[error("invalid private key: {0}")]
    InvalidKey(String),
    /// A certificate could not be decoded.
    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),
    /// No certificates were supplied with the key.
    #[error("certificate chain is empty")]
    EmptyCertificateChain,
    /// The leaf certificate does not certify the private key.
    #[error("leaf certificate does not match the private key")]
    CertificateKeyMismatch,
    /// The signing profile is invalid.
    #[error("invalid signing profile: {0}")]
    InvalidProfile(String),
}

/// Failure reported by a signature validator.
#[derive(Error, Debug)]
pub enum VerificationError {
    /// The document bytes do not belong to the supplied evidence.
    #[error("document does not match the validation evidence")]
    DocumentMismatch,
    /// The validator cannot produce hashes with the requested algorithm.
    #[error("evidence was produced with {available}, issuer requires {requested}")]
    HashAlgorithmMismatch {
        /// Algorithm requested by the issuer.
        requested: String,
        /// Algorithm the evidence uses.
        available: String,
    },
    /// The document could not be validated.
    #[error("signature validation failed: {0}")]
    Failed(String),
}

/// Problems with the validation evidence for one issuance.
#[derive(Error, Debug)]
pub enum EvidenceError {
    /// The validator failed.
    #[error(transparent)]
    Verification(#[from] VerificationError),
    /// The validator returned no signature records.
    #[error("validator returned no signatures")]
    NoSignatures,
    /// Certificate referencing is required but the record carries none.
    #[error("signature {index} has no signer certificate reference")]
    MissingCertReference {
        /// Position of the record in validator output.
        index: usize,
    },
    /// Certificate referencing is required but the validator failed to produce one.
    #[error("signature {index} certificate reference unavailable: {reason}")]
    CertReferenceUnavailable {
        /// Position of the record in validator output.
        index: usize,
        /// Validator-supplied reason.
        reason: String,
    },
}

/// Failures of the signing primitive.
#[derive(Error, Debug)]
pub enum SignError {
    /// ECDSA algorithm used with a key on a different curve.
    #[error("{algorithm} cannot be used with a {curve} key")]
    CurveMismatch {
        /// Requested algorithm.
        algorithm: JwsAlgorithm,
        /// Curve of the supplied key.
        curve: EcCurve,
    },
    /// Algorithm and key cannot be combined.
    #[error("{algorithm} cannot sign with a {family} key")]
    IncompatibleKey {
        /// Requested algorithm.
        algorithm: JwsAlgorithm,
        /// Family of the supplied key.
        family: KeyFamily,
    },
    /// The cryptographic backend failed.
    #[error("signature computation failed: {0}")]
    Backend(#[from] signature::Error),
    /// Header encoding failed.
    #[error("header encoding failed: {0}")]
    Encoding(#[from] svt_canonical::CanonicalizationError),
}

/// Failure of a single `issue` call; no token is produced.
#[derive(Error, Debug)]
pub enum IssueError {
    /// Evidence collection or filtering failed.
    #[error("evidence error: {0}")]
    Evidence(#[from] EvidenceError),
    /// The signing primitive failed.
    #[error("signing error: {0}")]
    Signing(#[from] SignError),
    /// The claim set could not be canonicalized.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] svt_canonical::CanonicalizationError),
    /// Token identifier generation failed.
    #[error("token id generation failed: {0}")]
    TokenId(#[from] svt_canonical::ValidationError),
    /// Issue or expiry time is outside the representable range.
    #[error("validity window out of range")]
    ValidityOutOfRange,
}

/// Failures while decoding or verifying a compact token.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The token is not three dot-separated segments.
    #[error("malformed token: {0}")]
    Malformed(String),
    /// A segment is not valid base64url.
    #[error("invalid base64url in {segment}: {source}")]
    Base64 {
        /// Segment name.
        segment: &'static str,
        /// Decoder error.
        source: base64::DecodeError,
    },
    /// A segment is not the expected JSON.
    #[error("invalid JSON in {segment}: {source}")]
    Json {
        /// Segment name.
        segment: &'static str,
        /// Parser error.
        source: serde_json::Error,
    },
    /// The key cannot verify tokens of this algorithm.
    #[error("{algorithm} cannot be verified with a {family} key")]
    KeyMismatch {
        /// Header algorithm.
        algorithm: JwsAlgorithm,
        /// Family of the verification key.
        family: KeyFamily,
    },
    /// The header carries no certificate chain.
    #[error("token header has no x5c certificate chain")]
    NoEmbeddedChain,
    /// The embedded certificate could not be used.
    #[error("embedded certificate: {0}")]
    Certificate(#[from] ConfigError),
    /// Signature check failed.
    #[error("signature verification failed")]
    BadSignature,
}
