//! Policy and time validation outcomes.

use serde::{Deserialize, Serialize};

use crate::Extensions;

/// Conclusion reached by a validation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationConclusion {
    /// The signature satisfied the policy.
    Passed,
    /// The signature violated the policy.
    Failed,
    /// The policy could not reach a conclusion.
    Indeterminate,
}

/// Outcome of validating a signature against one policy (`sig_val` entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyValidationClaims {
    /// Policy identifier.
    pub pol: String,
    /// Conclusion.
    pub res: ValidationConclusion,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Extension claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extensions>,
}

impl PolicyValidationClaims {
    /// Creates a policy outcome with no message or extensions.
    pub fn new(pol: impl Into<String>, res: ValidationConclusion) -> Self {
        Self {
            pol: pol.into(),
            res,
            msg: None,
            ext: None,
        }
    }

    /// Attaches a human-readable message.
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }
}

/// Evidence that a signature existed at a given time (`time_val` entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValidationClaims {
    /// Asserted time (seconds since the Unix epoch).
    pub time: i64,
    /// Type of time evidence (e.g., a timestamp token type URI).
    #[serde(rename = "type")]
    pub time_type: String,
    /// Issuer of the time evidence.
    pub iss: String,
    /// Identifier of the time evidence (e.g., timestamp serial number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Hash of the time evidence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Validation outcomes for the time evidence itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub val: Vec<PolicyValidationClaims>,
    /// Extension claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extensions>,
}
