//! Main token service implementation

use chrono::Utc;
use cm_shared::Settings;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and verifying signed JWTs
///
/// Holds the keys derived from the injected settings; it keeps no other
/// state and is shared across requests behind an `Arc`.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a token service from the process settings
    pub fn new(settings: &Settings) -> Self {
        Self::with_config(TokenServiceConfig::from(settings))
    }

    /// Creates a token service from an explicit configuration
    pub fn with_config(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Token lifetime in hours
    pub fn expiry_hours(&self) -> i64 {
        self.config.expiry_hours
    }

    /// Generates a signed token for the user
    ///
    /// The claims carry the user id and expire `expiry_hours` from now (UTC).
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - compact `header.claims.signature` token
    /// * `Err(DomainError)` - the user has no id or signing failed
    pub fn generate(&self, user: &User) -> Result<String, DomainError> {
        if user.id.is_empty() {
            return Err(DomainError::Token(TokenError::InvalidClaims));
        }

        let claims = Claims::new(user.id.clone(), Utc::now(), self.config.expiry_hours);
        self.encode_jwt(&claims)
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            DomainError::Token(TokenError::TokenGenerationFailed {
                reason: e.to_string(),
            })
        })
    }

    /// Verifies a token and returns its claims
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                ErrorKind::MissingRequiredClaim(_) => DomainError::Token(TokenError::InvalidClaims),
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        Ok(token_data.claims)
    }
}
