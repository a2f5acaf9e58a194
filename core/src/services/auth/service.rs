//! Main authentication service implementation

use std::sync::Arc;

use cm_shared::Settings;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthenticateRequest, AuthenticateResponse, ServiceResult};
use crate::errors::{DomainError, ServiceError};
use crate::repositories::{DocumentRepository, Filter};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

const INVALID_CREDENTIALS: &str = "invalid user or password!";

/// Authentication service issuing tokens for valid credentials
pub struct AuthenticationService<R: DocumentRepository<User>> {
    /// User repository for credential lookup
    user_repository: Arc<R>,
    /// Token service for JWT signing
    token_service: Arc<TokenService>,
    /// Hasher used to check submitted passwords against stored hashes
    hasher: PasswordHasher,
}

impl<R: DocumentRepository<User>> AuthenticationService<R> {
    /// Create a new authentication service signing with the given settings
    pub fn new(user_repository: Arc<R>, settings: &Settings) -> Self {
        Self::with_token_service(user_repository, Arc::new(TokenService::new(settings)))
    }

    /// Create a new authentication service sharing an existing token service
    pub fn with_token_service(user_repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
            hasher: PasswordHasher::default(),
        }
    }

    /// Authenticate a user name and password
    ///
    /// # Returns
    ///
    /// * `Ok` - the public user data and a signed token
    /// * `BadRequest` - request, user name or password missing
    /// * `NotFound` - unknown user name or wrong password; no token issued
    /// * `InternalServerError` - store, hashing or signing failure
    pub async fn authenticate(
        &self,
        request: Option<AuthenticateRequest>,
    ) -> ServiceResult<AuthenticateResponse> {
        let Some(request) = request else {
            return ServiceResult::bad_request(ServiceError::missing_argument(
                "authentication request can't be null!",
            ));
        };
        if request.username.is_empty() {
            return ServiceResult::bad_request(ServiceError::missing_argument(
                "username can't be null!",
            ));
        }
        if request.password.is_empty() {
            return ServiceResult::bad_request(ServiceError::missing_argument(
                "password can't be null!",
            ));
        }

        match self.try_authenticate(&request).await {
            Ok(Some(response)) => {
                tracing::info!(user_id = %response.user.id, "user authenticated");
                ServiceResult::ok(response)
            }
            Ok(None) => {
                tracing::warn!(username = %request.username, "authentication rejected");
                ServiceResult::not_found(ServiceError::not_found(INVALID_CREDENTIALS))
            }
            Err(e) => {
                tracing::error!(username = %request.username, error = %e, "authentication failed");
                ServiceResult::internal_error(ServiceError::persistence(
                    "could not authenticate",
                    &e,
                ))
            }
        }
    }

    /// `None` when the user is unknown or the password does not match
    async fn try_authenticate(
        &self,
        request: &AuthenticateRequest,
    ) -> Result<Option<AuthenticateResponse>, DomainError> {
        let filter = Filter::new().eq("user_name", request.username.as_str());
        let Some(user) = self.user_repository.find_one(&filter).await? else {
            return Ok(None);
        };

        if !self.hasher.verify(&request.password, &user.password).await? {
            return Ok(None);
        }

        let token = self.token_service.generate(&user)?;
        Ok(Some(AuthenticateResponse::new(user, token)))
    }
}
