//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it with the core `TokenService`, and injects the caller's
//! context into the request.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use cm_core::{domain::entities::token::Claims, services::token::TokenService};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::dto::{ErrorBody, ResultBody};

/// Authenticated caller injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: String,
    /// Token expiry (Unix seconds)
    pub expires_at: i64,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.id,
            expires_at: claims.exp,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a middleware verifying tokens with the given service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(unauthorized("Missing or invalid Authorization header"));
                }
            };

            let auth_context = match token_service.verify(&token) {
                Ok(claims) => AuthContext::from(claims),
                Err(e) => {
                    tracing::debug!(error = %e, path = %req.path(), "bearer token rejected");
                    return Err(unauthorized(format!("Token verification failed: {}", e)));
                }
            };

            req.extensions_mut().insert(auth_context);

            service.call(req).await
        })
    }
}

/// 401 carrying the same `{ value, error }` body as every other response
fn unauthorized(message: impl Into<String>) -> Error {
    let message = message.into();
    let body = ResultBody::<()> {
        value: None,
        error: Some(ErrorBody {
            kind: "unauthorized".to_string(),
            message: message.clone(),
        }),
    };
    InternalError::from_response(message, HttpResponse::Unauthorized().json(body)).into()
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[actix_web::test]
    async fn test_unauthorized_uses_result_body() {
        let response = unauthorized("Authentication required").error_response();
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["value"], serde_json::Value::Null);
        assert_eq!(body["error"]["kind"], "unauthorized");
        assert_eq!(body["error"]["message"], "Authentication required");
    }
}
