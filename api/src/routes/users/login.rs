use actix_web::{web, HttpResponse};

use ga_core::domain::value_objects::LoginRequest;
use ga_core::repositories::UserRepository;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /users/login
///
/// Returns `200 OK` with `{"user", "tokens": {"access_token", "refresh_token"}}`
/// or `401` when the phone number or password is wrong.
pub async fn login<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: UserRepository + 'static,
{
    match state.user_service.login(request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => handle_domain_error(e),
    }
}
