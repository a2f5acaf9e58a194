//! Configuration for the token service

use std::str::FromStr;

use cm_shared::Settings;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::TOKEN_EXPIRY_HOURS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token expiry in hours
    pub expiry_hours: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            expiry_hours: TOKEN_EXPIRY_HOURS,
        }
    }
}

impl From<&Settings> for TokenServiceConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            jwt_secret: settings.secret.clone(),
            algorithm: hmac_algorithm(&settings.algorithm),
            expiry_hours: settings.token_expiry_hours,
        }
    }
}

/// Keys are derived from a shared secret, so only the HMAC family applies
fn hmac_algorithm(name: &str) -> Algorithm {
    match Algorithm::from_str(name) {
        Ok(algorithm @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => algorithm,
        _ => {
            tracing::warn!(algorithm = %name, "unsupported JWT algorithm, falling back to HS256");
            Algorithm::HS256
        }
    }
}
