use actix_web::{web, HttpResponse};

use ga_core::domain::value_objects::RegisterRequest;
use ga_core::repositories::UserRepository;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /users/register
///
/// # Request Body
///
/// ```json
/// {
///     "phone_number": "09123456789",
///     "name": "Ali",
///     "password": "Passw0rd!"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"user": {"id", "name", "phone_number"}}`, `400` for a
/// malformed body and `422` when a registration rule fails.
pub async fn register<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    R: UserRepository + 'static,
{
    match state.user_service.register(request.into_inner()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => handle_domain_error(e),
    }
}
