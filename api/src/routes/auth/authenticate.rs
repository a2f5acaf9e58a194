use actix_web::{web, HttpResponse};

use cm_core::domain::entities::{Customer, User};
use cm_core::domain::value_objects::AuthenticateRequest;
use cm_core::repositories::DocumentRepository;

use crate::handlers::respond;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/authenticate
///
/// # Request Body
///
/// ```json
/// { "username": "jdoe", "password": "s3cret" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "value": { "user": { "id": "...", "user_name": "jdoe", ... }, "token": "eyJ..." },
///     "error": null
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: body, username or password missing
/// - 404 Not Found: unknown user or wrong password
/// - 500 Internal Server Error: store or signing failure
pub async fn authenticate<C, U>(
    state: web::Data<AppState<C, U>>,
    request: Option<web::Json<AuthenticateRequest>>,
) -> HttpResponse
where
    C: DocumentRepository<Customer> + 'static,
    U: DocumentRepository<User> + 'static,
{
    let request = request.map(web::Json::into_inner);
    respond(state.auth_service.authenticate(request).await)
}
