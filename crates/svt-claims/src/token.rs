//! Outer JWT claim set.

use serde::{Deserialize, Serialize};
use svt_canonical::{IssuerId, TokenId};

use crate::svt::SvtClaims;

/// Payload of a Signed Validation Token.
///
/// Times are NumericDate values (whole seconds since the Unix epoch).
/// `exp` is present only when the issuing profile configured a validity
/// period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaimSet {
    /// Unique token identifier.
    pub jti: TokenId,
    /// Issuer identifier.
    pub iss: IssuerId,
    /// Optional subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Intended audience, in configured order.
    pub aud: Vec<String>,
    /// Issue time.
    pub iat: i64,
    /// Expiry time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Signature validation claims.
    pub sig_val_claims: SvtClaims,
}

impl TokenClaimSet {
    /// Whether the token is expired at `now` (seconds since the epoch).
    ///
    /// Tokens without `exp` never expire.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| now >= exp)
    }

    /// Number of signature records carried by the token.
    pub fn signature_count(&self) -> usize {
        self.sig_val_claims.sig.len()
    }
}
