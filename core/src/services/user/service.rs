//! User service implementation

use std::sync::Arc;

use cm_shared::StatusCode;

use crate::domain::entities::document::Document;
use crate::domain::entities::user::User;
use crate::domain::value_objects::ServiceResult;
use crate::errors::{DomainError, ServiceError};
use crate::repositories::{DocumentRepository, Filter};
use crate::services::entity::EntityService;
use crate::services::password::PasswordHasher;

/// User CRUD and credential validation
///
/// Passwords are hashed before `create` and `update` reach the repository,
/// so stored users never carry plain text. A user name or login may belong
/// to one user only; credential checks look up a single stored user.
pub struct UserService<R: DocumentRepository<User>> {
    entities: EntityService<User, R>,
    repository: Arc<R>,
    hasher: PasswordHasher,
}

impl<R: DocumentRepository<User>> UserService<R> {
    pub fn new(repository: Arc<R>, hasher: PasswordHasher) -> Self {
        Self {
            entities: EntityService::new(repository.clone()),
            repository,
            hasher,
        }
    }

    /// Stores a new user with a hashed password
    pub async fn create(&self, user: Option<User>) -> ServiceResult<User> {
        let user = match user {
            Some(user) if user.validate().is_ok() => user,
            // missing or invalid input is reported by the generic checks
            other => return self.entities.create(other).await,
        };

        match self.find_conflict(&user, None).await {
            Ok(None) => {}
            Ok(Some(existing)) => return Self::already_exists(&existing),
            Err(error) => {
                return ServiceResult::with_error(
                    Some(user),
                    StatusCode::InternalServerError,
                    ServiceError::persistence("could not create the user on database", &error),
                );
            }
        }

        match self.hash_password(user.clone()).await {
            Ok(hashed) => self.entities.create(Some(hashed)).await,
            Err(error) => ServiceResult::with_error(
                Some(user),
                StatusCode::InternalServerError,
                ServiceError::persistence("could not create the user on database", &error),
            ),
        }
    }

    pub async fn get(&self, id: &str) -> ServiceResult<User> {
        self.entities.get(id).await
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<User>> {
        self.entities.get_all().await
    }

    /// Replaces a user, re-hashing the submitted password
    pub async fn update(&self, id: &str, user: Option<User>) -> ServiceResult<User> {
        let user = match user {
            Some(user) if !id.is_empty() && user.validate().is_ok() => user,
            other => return self.entities.update(id, other).await,
        };

        match self.find_conflict(&user, Some(id)).await {
            Ok(None) => {}
            Ok(Some(existing)) => return Self::already_exists(&existing),
            Err(error) => {
                return ServiceResult::with_error(
                    Some(user),
                    StatusCode::InternalServerError,
                    ServiceError::persistence("could not update the user on database", &error),
                );
            }
        }

        match self.hash_password(user.clone()).await {
            Ok(hashed) => self.entities.update(id, Some(hashed)).await,
            Err(error) => ServiceResult::with_error(
                Some(user),
                StatusCode::InternalServerError,
                ServiceError::persistence("could not update the user on database", &error),
            ),
        }
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<bool> {
        self.entities.delete(id).await
    }

    /// Checks a login and password pair against the stored user
    ///
    /// # Returns
    ///
    /// * `Ok` with `true` - the credentials match
    /// * `NotFound` with `false` - unknown login or wrong password
    /// * `BadRequest` / `InternalServerError` with `false` otherwise
    pub async fn validate(&self, user: Option<User>) -> ServiceResult<bool> {
        let Some(user) = user else {
            return ServiceResult::with_error(
                Some(false),
                StatusCode::BadRequest,
                ServiceError::missing_argument("user cannot be null!"),
            );
        };

        let filter = Filter::new().eq("login", user.login.as_str());
        let stored = match self.repository.find_one(&filter).await {
            Ok(Some(stored)) => stored,
            Ok(None) => return Self::invalid_user(&user.login),
            Err(e) => return Self::validation_failed(&e),
        };

        match self.hasher.verify(&user.password, &stored.password).await {
            Ok(true) => ServiceResult::ok(true),
            Ok(false) => Self::invalid_user(&user.login),
            Err(e) => Self::validation_failed(&e),
        }
    }

    /// Finds a stored user other than `id` holding the user name or login
    async fn find_conflict(
        &self,
        user: &User,
        id: Option<&str>,
    ) -> Result<Option<User>, DomainError> {
        let keys = [("user_name", &user.user_name), ("login", &user.login)];
        for (field, value) in keys.into_iter().filter(|(_, value)| !value.is_empty()) {
            let filter = Filter::new().eq(field, value.as_str());
            if let Some(existing) = self.repository.find_one(&filter).await? {
                if Some(existing.id.as_str()) != id {
                    return Ok(Some(existing));
                }
            }
        }
        Ok(None)
    }

    fn already_exists(existing: &User) -> ServiceResult<User> {
        tracing::warn!(existing_id = %existing.id, "user name or login already taken");
        ServiceResult::bad_request(ServiceError::invalid_argument("user already exists!"))
    }

    async fn hash_password(&self, mut user: User) -> Result<User, DomainError> {
        user.password = self.hasher.hash(&user.password).await?;
        Ok(user)
    }

    fn invalid_user(login: &str) -> ServiceResult<bool> {
        tracing::warn!(%login, "user validation rejected");
        ServiceResult::with_error(
            Some(false),
            StatusCode::NotFound,
            ServiceError::not_found("invalid user!"),
        )
    }

    fn validation_failed(error: &impl std::fmt::Display) -> ServiceResult<bool> {
        tracing::error!(error = %error, "could not validate user");
        ServiceResult::with_error(
            Some(false),
            StatusCode::InternalServerError,
            ServiceError::persistence("could not validate user", error),
        )
    }
}
