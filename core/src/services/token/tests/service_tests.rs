//! Unit tests for token service

use chrono::{Duration, Utc};
use cm_shared::Settings;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> TokenService {
    TokenService::new(&Settings::new("test-secret"))
}

fn test_user() -> User {
    User::new("jdoe", "hash").with_id("user-42")
}

#[test]
fn test_generate_produces_compact_token() {
    let service = create_test_service();

    let token = service.generate(&test_user()).unwrap();

    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|s| !s.is_empty()));
}

#[test]
fn test_generated_claims_carry_id_and_twelve_hour_expiry() {
    let service = create_test_service();
    let before = Utc::now().timestamp();

    let token = service.generate(&test_user()).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.id, "user-42");
    let expected = before + 12 * 3600;
    assert!((claims.exp - expected).abs() <= 5);
    assert_eq!(claims.exp - claims.iat, 12 * 3600);
}

#[test]
fn test_expiry_follows_settings() {
    let settings = Settings {
        secret: "test-secret".to_string(),
        token_expiry_hours: 1,
        algorithm: "HS256".to_string(),
    };
    let service = TokenService::new(&settings);

    let token = service.generate(&test_user()).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(service.expiry_hours(), 1);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_generate_requires_user_id() {
    let service = create_test_service();

    let result = service.generate(&User::new("jdoe", "hash"));
    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidClaims))));
}

#[test]
fn test_verify_rejects_foreign_signature() {
    let service = create_test_service();
    let other = TokenService::with_config(TokenServiceConfig {
        jwt_secret: "another-secret".to_string(),
        ..Default::default()
    });

    let token = other.generate(&test_user()).unwrap();
    let result = service.verify(&token);

    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidSignature))));
}

#[test]
fn test_verify_rejects_expired_token() {
    let service = create_test_service();
    let claims = Claims::new("user-42", Utc::now() - Duration::hours(14), 12);

    let token = service.encode_jwt(&claims).unwrap();
    let result = service.verify(&token);

    assert!(matches!(result, Err(DomainError::Token(TokenError::TokenExpired))));
}

#[test]
fn test_verify_rejects_malformed_token() {
    let service = create_test_service();

    let result = service.verify("not-a-jwt");
    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidTokenFormat))));
}

#[test]
fn test_token_is_signed_with_configured_algorithm() {
    let settings = Settings {
        algorithm: "HS512".to_string(),
        ..Settings::new("test-secret")
    };
    let service = TokenService::new(&settings);

    let token = service.generate(&test_user()).unwrap();
    let header = jsonwebtoken::decode_header(&token).unwrap();

    assert_eq!(header.alg, jsonwebtoken::Algorithm::HS512);
    assert_eq!(service.verify(&token).unwrap().id, test_user().id);
}
