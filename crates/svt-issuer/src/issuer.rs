//! Token assembler.

use chrono::{DateTime, Utc};
use svt_canonical::{Canonicalizer, TokenId};
use svt_claims::{CertRef, SignatureClaims, SvtClaims, TokenClaimSet};
use tracing::{debug, instrument};

use crate::algorithm::{AlgorithmBinding, JwsAlgorithm};
use crate::errors::{ConfigError, EvidenceError, IssueError};
use crate::jws::{JwsSigner, TokenSigner};
use crate::keys::KeyMaterial;
use crate::profile::SigningProfile;
use crate::token::SignedToken;
use crate::token_id::new_token_id;
use crate::validator::SignatureValidator;
use crate::validity::Validity;

/// Issues Signed Validation Tokens for documents validated by `V`.
///
/// An issuer holds only read-only state (key material, algorithm binding,
/// validator, signer), so one instance can serve concurrent `issue` calls
/// without locking. Calls do not influence each other.
#[derive(Debug)]
pub struct SvtIssuer<V, S = JwsSigner> {
    key: KeyMaterial,
    binding: AlgorithmBinding,
    validator: V,
    signer: S,
    canonicalizer: Canonicalizer,
}

impl<V: SignatureValidator> SvtIssuer<V> {
    /// Builds an issuer signing with the default JWS signer.
    ///
    /// Fails if `algorithm` is unsupported or does not fit the key family.
    pub fn new(
        key: KeyMaterial,
        algorithm: JwsAlgorithm,
        validator: V,
    ) -> Result<Self, ConfigError> {
        Self::with_signer(key, algorithm, validator, JwsSigner::new())
    }
}

impl<V: SignatureValidator, S: TokenSigner> SvtIssuer<V, S> {
    /// Builds an issuer with a custom signing primitive.
    pub fn with_signer(
        key: KeyMaterial,
        algorithm: JwsAlgorithm,
        validator: V,
        signer: S,
    ) -> Result<Self, ConfigError> {
        let binding = AlgorithmBinding::validate(algorithm, key.key())?;
        Ok(Self {
            key,
            binding,
            validator,
            signer,
            canonicalizer: Canonicalizer::default(),
        })
    }

    /// Algorithm binding checked at construction.
    pub fn binding(&self) -> AlgorithmBinding {
        self.binding
    }

    /// Validator supplying evidence.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Validates `document` and issues a token stamped with the current time.
    pub fn issue(
        &self,
        document: &V::Document,
        profile: &SigningProfile,
    ) -> Result<SignedToken, IssueError> {
        self.issue_at(document, profile, Utc::now())
    }

    /// Validates `document` and issues a token stamped with `now`.
    #[instrument(
        skip(self, document, profile),
        fields(
            issuer = %profile.issuer_id(),
            alg = %self.binding.algorithm(),
            format = self.validator.profile().as_str()
        )
    )]
    pub fn issue_at(
        &self,
        document: &V::Document,
        profile: &SigningProfile,
        now: DateTime<Utc>,
    ) -> Result<SignedToken, IssueError> {
        let evidence = self
            .validator
            .verify(document, self.binding.hash_algorithm())
            .map_err(EvidenceError::from)?;
        debug!(signatures = evidence.len(), "validator returned evidence");

        let jti = new_token_id()?;
        let validity = Validity::compute(now, profile.validity_period())?;
        let claims = self.assemble_claims(evidence, profile, jti, validity)?;
        debug!(
            jti = %claims.jti,
            iat = claims.iat,
            exp = ?claims.exp,
            "assembled claim set"
        );

        let payload = self.canonicalizer.canonicalize(&claims)?;
        let jws = self.signer.sign(
            &self.key,
            self.binding.algorithm(),
            &payload,
            !profile.cert_ref(),
        )?;
        Ok(SignedToken::from_signed(jws, claims, payload))
    }

    /// Builds the claim set for fixed evidence, token id and validity.
    ///
    /// Identical inputs always give an identical claim set, and therefore
    /// identical canonical bytes.
    pub fn assemble_claims(
        &self,
        mut evidence: Vec<SignatureClaims>,
        profile: &SigningProfile,
        jti: TokenId,
        validity: Validity,
    ) -> Result<TokenClaimSet, EvidenceError> {
        if evidence.is_empty() {
            return Err(EvidenceError::NoSignatures);
        }
        apply_cert_ref_policy(&mut evidence, profile.cert_ref())?;

        Ok(TokenClaimSet {
            jti,
            iss: profile.issuer_id().clone(),
            sub: profile.subject().map(str::to_string),
            aud: profile.audience().to_vec(),
            iat: validity.iat(),
            exp: validity.exp(),
            sig_val_claims: SvtClaims::new(
                self.validator.profile(),
                self.binding.hash_algorithm(),
                evidence,
            ),
        })
    }
}

fn apply_cert_ref_policy(
    evidence: &mut [SignatureClaims],
    cert_ref: bool,
) -> Result<(), EvidenceError> {
    if !cert_ref {
        let stripped = evidence
            .iter_mut()
            .map(|sig| std::mem::take(&mut sig.signer_cert_ref))
            .filter(|previous| !previous.is_absent())
            .count();
        if stripped > 0 {
            debug!(stripped, "certificate references disabled by profile");
        }
        return Ok(());
    }

    for (index, sig) in evidence.iter().enumerate() {
        match &sig.signer_cert_ref {
            CertRef::Present(_) => {}
            CertRef::Disabled => return Err(EvidenceError::MissingCertReference { index }),
            CertRef::Unavailable { reason } => {
                return Err(EvidenceError::CertReferenceUnavailable {
                    index,
                    reason: reason.clone(),
                })
            }
        }
    }
    Ok(())
}
