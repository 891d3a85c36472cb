use actix_web::{http::header, web, HttpRequest, HttpResponse};

use ga_core::repositories::UserRepository;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /users/profile
///
/// Expects `Authorization: Bearer <access_token>`; a missing or unusable
/// header is answered with `401`.
pub async fn profile<R>(req: HttpRequest, state: web::Data<AppState<R>>) -> HttpResponse
where
    R: UserRepository + 'static,
{
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    match state.user_service.profile(authorization).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => handle_domain_error(e),
    }
}
