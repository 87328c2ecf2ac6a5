//! Issue and expiry time computation.

use chrono::{DateTime, Duration as TimeDelta, Utc};
use std::time::Duration;

use crate::errors::IssueError;

/// Validity window of one token.
///
/// Times are held at whole-second resolution because that is what the
/// `iat`/`exp` NumericDate claims can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    /// Issue time.
    pub issued_at: DateTime<Utc>,
    /// Expiry time; `None` means the token never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Validity {
    /// Computes the window for a token issued at `issue_instant`.
    ///
    /// Sub-second parts of the instant and of the period are dropped.
    pub fn compute(
        issue_instant: DateTime<Utc>,
        period: Option<Duration>,
    ) -> Result<Self, IssueError> {
        let issued_at = DateTime::<Utc>::from_timestamp(issue_instant.timestamp(), 0)
            .ok_or(IssueError::ValidityOutOfRange)?;
        let expires_at = match period {
            Some(period) => {
                let secs =
                    i64::try_from(period.as_secs()).map_err(|_| IssueError::ValidityOutOfRange)?;
                let delta = TimeDelta::try_seconds(secs).ok_or(IssueError::ValidityOutOfRange)?;
                Some(
                    issued_at
                        .checked_add_signed(delta)
                        .ok_or(IssueError::ValidityOutOfRange)?,
                )
            }
            None => None,
        };
        Ok(Self {
            issued_at,
            expires_at,
        })
    }

    /// `iat` claim value.
    pub fn iat(&self) -> i64 {
        self.issued_at.timestamp()
    }

    /// `exp` claim value.
    pub fn exp(&self) -> Option<i64> {
        self.expires_at.map(|exp| exp.timestamp())
    }
}
