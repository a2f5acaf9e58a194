//! Unit tests for authentication service

use std::sync::atomic::Ordering;
use std::sync::Arc;

use cm_shared::{Settings, StatusCode};

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthenticateRequest;
use crate::errors::ServiceError;
use crate::repositories::MockDocumentRepository;
use crate::services::auth::AuthenticationService;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

async fn create_test_service() -> (
    AuthenticationService<MockDocumentRepository<User>>,
    Arc<MockDocumentRepository<User>>,
    Arc<TokenService>,
) {
    let hash = PasswordHasher::new(4).hash("s3cret").await.unwrap();
    let repository = Arc::new(
        MockDocumentRepository::new()
            .with_document(User::new("jdoe", hash).with_id("789").with_name("John Doe")),
    );
    let token_service = Arc::new(TokenService::new(&Settings::new("test-secret")));
    let service =
        AuthenticationService::with_token_service(repository.clone(), token_service.clone());
    (service, repository, token_service)
}

fn message(error: &Option<ServiceError>) -> String {
    error.as_ref().map(|e| e.to_string()).unwrap_or_default()
}

#[tokio::test]
async fn test_authenticate_issues_token_for_valid_credentials() {
    let (service, _, token_service) = create_test_service().await;

    let result = service
        .authenticate(Some(AuthenticateRequest::new("jdoe", "s3cret")))
        .await;

    assert_eq!(result.status_code, StatusCode::Ok);
    assert!(result.error.is_none());
    let response = result.value.unwrap();
    assert_eq!(response.user.id, "789");
    assert_eq!(response.user.name, "John Doe");

    let claims = token_service.verify(&response.token).unwrap();
    assert_eq!(claims.id, "789");
    assert_eq!(claims.exp - claims.iat, 12 * 3600);
}

#[tokio::test]
async fn test_authenticate_rejects_missing_request() {
    let (service, repository, _) = create_test_service().await;

    let result = service.authenticate(None).await;

    assert!(result.value.is_none());
    assert_eq!(result.status_code, StatusCode::BadRequest);
    assert!(message(&result.error).contains("authentication request can't be null!"));
    assert_eq!(repository.calls(), 0);
}

#[tokio::test]
async fn test_authenticate_rejects_empty_username() {
    let (service, repository, _) = create_test_service().await;

    let result = service
        .authenticate(Some(AuthenticateRequest::new("", "s3cret")))
        .await;

    assert_eq!(result.status_code, StatusCode::BadRequest);
    assert!(message(&result.error).contains("username can't be null!"));
    assert_eq!(repository.calls(), 0);
}

#[tokio::test]
async fn test_authenticate_rejects_empty_password() {
    let (service, repository, _) = create_test_service().await;

    let result = service
        .authenticate(Some(AuthenticateRequest::new("jdoe", "")))
        .await;

    assert_eq!(result.status_code, StatusCode::BadRequest);
    assert!(message(&result.error).contains("password can't be null!"));
    assert_eq!(repository.calls(), 0);
}

#[tokio::test]
async fn test_authenticate_rejects_wrong_password() {
    let (service, _, _) = create_test_service().await;

    let result = service
        .authenticate(Some(AuthenticateRequest::new("jdoe", "wrong")))
        .await;

    assert!(result.value.is_none());
    assert_eq!(result.status_code, StatusCode::NotFound);
    assert!(message(&result.error).contains("invalid user or password!"));
}

#[tokio::test]
async fn test_authenticate_rejects_unknown_user() {
    let (service, _, _) = create_test_service().await;

    let result = service
        .authenticate(Some(AuthenticateRequest::new("nobody", "s3cret")))
        .await;

    assert!(result.value.is_none());
    assert_eq!(result.status_code, StatusCode::NotFound);
    assert!(message(&result.error).contains("invalid user or password!"));
}

#[tokio::test]
async fn test_authenticate_reports_store_failure() {
    let (service, repository, _) = create_test_service().await;
    repository.fail_find_one.store(true, Ordering::SeqCst);

    let result = service
        .authenticate(Some(AuthenticateRequest::new("jdoe", "s3cret")))
        .await;

    assert!(result.value.is_none());
    assert_eq!(result.status_code, StatusCode::InternalServerError);
    assert!(message(&result.error).contains("could not authenticate:"));
}

#[tokio::test]
async fn test_response_never_exposes_password_hash() {
    let (service, _, _) = create_test_service().await;

    let result = service
        .authenticate(Some(AuthenticateRequest::new("jdoe", "s3cret")))
        .await;

    let json = serde_json::to_string(&result.value.unwrap()).unwrap();
    assert!(!json.contains("password"));
    assert!(!json.contains("$2"));
}
