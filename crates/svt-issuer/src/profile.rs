//! Per-issuance signing profile.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use svt_canonical::IssuerId;

use crate::errors::ConfigError;

/// Issuance settings: who issues, for whom, and for how long.
///
/// Construct with [`SigningProfile::builder`] or deserialize from JSON; both
/// routes run the same checks, so a `SigningProfile` value is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSigningProfile", into = "RawSigningProfile")]
pub struct SigningProfile {
    issuer_id: IssuerId,
    audience: Vec<String>,
    validity_period: Option<Duration>,
    cert_ref: bool,
    subject: Option<String>,
}

impl SigningProfile {
    /// Starts a profile for `issuer_id`.
    pub fn builder(issuer_id: impl Into<String>) -> SigningProfileBuilder {
        SigningProfileBuilder {
            issuer_id: issuer_id.into(),
            audience: Vec::new(),
            validity_period: None,
            cert_ref: true,
            subject: None,
        }
    }

    /// Issuer identifier (`iss`).
    pub fn issuer_id(&self) -> &IssuerId {
        &self.issuer_id
    }

    /// Audience (`aud`), duplicates removed, in configured order.
    pub fn audience(&self) -> &[String] {
        &self.audience
    }

    /// Validity period; `None` means tokens never expire.
    pub fn validity_period(&self) -> Option<Duration> {
        self.validity_period
    }

    /// Whether signature records must carry signer certificate references.
    pub fn cert_ref(&self) -> bool {
        self.cert_ref
    }

    /// Subject (`sub`).
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}

/// Builder for [`SigningProfile`].
#[derive(Debug, Clone)]
pub struct SigningProfileBuilder {
    issuer_id: String,
    audience: Vec<String>,
    validity_period: Option<Duration>,
    cert_ref: bool,
    subject: Option<String>,
}

impl SigningProfileBuilder {
    /// Appends one audience entry.
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience.push(audience.into());
        self
    }

    /// Sets the validity period.
    pub fn validity_period(mut self, period: Duration) -> Self {
        self.validity_period = Some(period);
        self
    }

    /// Enables or disables certificate references (default enabled).
    pub fn cert_ref(mut self, cert_ref: bool) -> Self {
        self.cert_ref = cert_ref;
        self
    }

    /// Sets the subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Validates and builds the profile.
    pub fn build(self) -> Result<SigningProfile, ConfigError> {
        let issuer_id = IssuerId::parse(&self.issuer_id)
            .map_err(|e| ConfigError::InvalidProfile(format!("issuer_id: {}", e)))?;

        let mut audience: Vec<String> = Vec::with_capacity(self.audience.len());
        for entry in self.audience {
            if entry.is_empty() {
                return Err(ConfigError::InvalidProfile(
                    "audience entries must be non-empty".to_string(),
                ));
            }
            if !audience.contains(&entry) {
                audience.push(entry);
            }
        }
        if audience.is_empty() {
            return Err(ConfigError::InvalidProfile(
                "audience must have at least one entry".to_string(),
            ));
        }

        if let Some(period) = self.validity_period {
            if period.as_secs() == 0 {
                return Err(ConfigError::InvalidProfile(
                    "validity period must be at least one second".to_string(),
                ));
            }
        }

        Ok(SigningProfile {
            issuer_id,
            audience,
            validity_period: self.validity_period,
            cert_ref: self.cert_ref,
            subject: self.subject,
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSigningProfile {
    issuer_id: String,
    audience: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    validity_period_secs: Option<u64>,
    #[serde(default = "default_cert_ref")]
    cert_ref: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
}

fn default_cert_ref() -> bool {
    true
}

impl TryFrom<RawSigningProfile> for SigningProfile {
    type Error = ConfigError;

    fn try_from(raw: RawSigningProfile) -> Result<Self, Self::Error> {
        let mut builder = SigningProfile::builder(raw.issuer_id).cert_ref(raw.cert_ref);
        for entry in raw.audience {
            builder = builder.audience(entry);
        }
        if let Some(secs) = raw.validity_period_secs {
            builder = builder.validity_period(Duration::from_secs(secs));
        }
        if let Some(subject) = raw.subject {
            builder = builder.subject(subject);
        }
        builder.build()
    }
}

impl From<SigningProfile> for RawSigningProfile {
    fn from(profile: SigningProfile) -> Self {
        RawSigningProfile {
            issuer_id: profile.issuer_id.as_str().to_string(),
            audience: profile.audience,
            validity_period_secs: profile.validity_period.map(|p| p.as_secs()),
            cert_ref: profile.cert_ref,
            subject: profile.subject,
        }
    }
}
