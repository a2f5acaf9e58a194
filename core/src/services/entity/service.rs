//! Generic CRUD service over a document repository

use std::marker::PhantomData;
use std::sync::Arc;

use cm_shared::StatusCode;

use crate::domain::entities::customer::Customer;
use crate::domain::entities::document::Document;
use crate::domain::value_objects::ServiceResult;
use crate::errors::ServiceError;
use crate::repositories::DocumentRepository;

const ID_REQUIRED: &str = "parameter Id cannot be null or empty!";
const TARGET_ID_REQUIRED: &str = "id cannot be null or empty!";

/// CRUD service for one document type
///
/// Validates input, calls the repository and maps every outcome onto a
/// `ServiceResult`. Validation failures return before any repository call;
/// store errors never escape.
pub struct EntityService<D, R>
where
    D: Document,
    R: DocumentRepository<D>,
{
    repository: Arc<R>,
    _document: PhantomData<fn() -> D>,
}

/// Client CRUD service
pub type ClientService<R> = EntityService<Customer, R>;

impl<D, R> EntityService<D, R>
where
    D: Document,
    R: DocumentRepository<D>,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _document: PhantomData,
        }
    }

    /// Persists a new entity
    ///
    /// * `None` or invalid fields - `BadRequest`
    /// * store failure - `InternalServerError` carrying the input entity
    /// * success - `Created` carrying the stored copy
    pub async fn create(&self, entity: Option<D>) -> ServiceResult<D> {
        let entity = match Self::require_entity(entity) {
            Ok(entity) => entity,
            Err(error) => return ServiceResult::bad_request(error),
        };

        match self.repository.create(entity.clone()).await {
            Ok(created) => {
                tracing::debug!(id = %created.id(), "{} created", D::LABEL);
                ServiceResult::created(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "could not create {}", D::LABEL);
                ServiceResult::with_error(
                    Some(entity),
                    StatusCode::InternalServerError,
                    ServiceError::persistence(
                        format!("could not create the {} on database", D::LABEL),
                        &e,
                    ),
                )
            }
        }
    }

    /// Fetches one entity by id
    pub async fn get(&self, id: &str) -> ServiceResult<D> {
        if id.is_empty() {
            return ServiceResult::bad_request(ServiceError::missing_argument(ID_REQUIRED));
        }

        match self.repository.find_by_id(id).await {
            Ok(Some(entity)) => ServiceResult::ok(entity),
            Ok(None) => {
                tracing::debug!(%id, "{} not found", D::LABEL);
                ServiceResult::not_found(ServiceError::not_found(format!(
                    "{} not found!",
                    D::LABEL
                )))
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "could not get {}", D::LABEL);
                ServiceResult::internal_error(ServiceError::persistence(
                    format!("could not get the {} from database", D::LABEL),
                    &e,
                ))
            }
        }
    }

    /// Lists every entity
    ///
    /// An empty collection is `NoContent` with an empty list and an error
    /// explaining that nothing is stored.
    pub async fn get_all(&self) -> ServiceResult<Vec<D>> {
        match self.repository.find_all().await {
            Ok(entities) if entities.is_empty() => ServiceResult::with_error(
                Some(entities),
                StatusCode::NoContent,
                ServiceError::empty(format!("there are no {}!", D::LABEL_PLURAL)),
            ),
            Ok(entities) => ServiceResult::ok(entities),
            Err(e) => {
                tracing::error!(error = %e, "could not list {}", D::LABEL_PLURAL);
                ServiceResult::internal_error(ServiceError::persistence(
                    format!("could not list the {} from database", D::LABEL_PLURAL),
                    &e,
                ))
            }
        }
    }

    /// Replaces an existing entity
    ///
    /// Checks run in order: id, entity, existence, persistence. On success
    /// the result is `NoContent` and still carries the input entity.
    pub async fn update(&self, id: &str, entity: Option<D>) -> ServiceResult<D> {
        if id.is_empty() {
            return ServiceResult::with_error(
                entity,
                StatusCode::BadRequest,
                ServiceError::missing_argument(TARGET_ID_REQUIRED),
            );
        }
        let entity = match Self::require_entity(entity) {
            Ok(entity) => entity,
            Err(error) => return ServiceResult::bad_request(error),
        };

        match self.repository.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::debug!(%id, "{} to update not found", D::LABEL);
                return ServiceResult::not_found(ServiceError::not_found(format!(
                    "{} to be updated was not found!",
                    D::LABEL
                )));
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "could not look up {}", D::LABEL);
                return ServiceResult::with_error(
                    Some(entity),
                    StatusCode::InternalServerError,
                    ServiceError::persistence(
                        format!("could not get the {} from database", D::LABEL),
                        &e,
                    ),
                );
            }
        }

        // Not transactional: a concurrent remove between lookup and replace goes unnoticed.
        match self.repository.replace(id, entity.clone()).await {
            Ok(_) => {
                tracing::debug!(%id, "{} updated", D::LABEL);
                ServiceResult::new(Some(entity), StatusCode::NoContent)
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "could not update {}", D::LABEL);
                ServiceResult::with_error(
                    Some(entity),
                    StatusCode::InternalServerError,
                    ServiceError::persistence(
                        format!("could not update the {} on database", D::LABEL),
                        &e,
                    ),
                )
            }
        }
    }

    /// Removes an entity; the value tells whether the removal happened
    pub async fn delete(&self, id: &str) -> ServiceResult<bool> {
        if id.is_empty() {
            return ServiceResult::with_error(
                Some(false),
                StatusCode::BadRequest,
                ServiceError::missing_argument(TARGET_ID_REQUIRED),
            );
        }

        match self.repository.remove(id).await {
            Ok(()) => {
                tracing::debug!(%id, "{} deleted", D::LABEL);
                ServiceResult::new(Some(true), StatusCode::NoContent)
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "could not delete {}", D::LABEL);
                ServiceResult::with_error(
                    Some(false),
                    StatusCode::InternalServerError,
                    ServiceError::persistence(
                        format!("could not delete the {} on database", D::LABEL),
                        &e,
                    ),
                )
            }
        }
    }

    fn require_entity(entity: Option<D>) -> Result<D, ServiceError> {
        let Some(entity) = entity else {
            tracing::warn!("{} missing from request", D::LABEL);
            return Err(ServiceError::missing_argument(format!(
                "{} cannot be null!",
                D::LABEL
            )));
        };
        entity.validate()?;
        Ok(entity)
    }
}
