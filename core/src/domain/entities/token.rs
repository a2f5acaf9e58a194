//! Claims carried by issued JWTs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default token lifetime (12 hours)
pub const TOKEN_EXPIRY_HOURS: i64 = 12;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated user
    pub id: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a user, expiring `expiry_hours` after `issued_at`
    pub fn new(user_id: impl Into<String>, issued_at: DateTime<Utc>, expiry_hours: i64) -> Self {
        let expiry = issued_at + Duration::hours(expiry_hours);
        Self {
            id: user_id.into(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Seconds of validity left, zero once expired
    pub fn remaining_seconds(&self) -> i64 {
        (self.exp - Utc::now().timestamp()).max(0)
    }
}
