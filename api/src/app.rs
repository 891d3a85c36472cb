//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};

use ga_core::repositories::UserRepository;
use ga_core::services::password::BcryptPasswordHasher;
use ga_core::services::token::{TokenService, TokenServiceConfig};
use ga_core::services::user::{UserService, UserServiceConfig};
use ga_shared::{error_codes, AuthConfig, ErrorResponse};

use crate::handlers::error::json_error_handler;
use crate::routes::health::health_check;
use crate::routes::users::{login, profile, register};

/// User service as wired by the HTTP layer
pub type AppUserService<R> = UserService<R, BcryptPasswordHasher, TokenService>;

/// Application state that holds shared services
pub struct AppState<R>
where
    R: UserRepository + 'static,
{
    pub user_service: Arc<AppUserService<R>>,
}

impl<R> AppState<R>
where
    R: UserRepository + 'static,
{
    pub fn new(user_service: AppUserService<R>) -> Self {
        Self {
            user_service: Arc::new(user_service),
        }
    }

    /// Builds the services around `repository` from the auth configuration
    pub fn from_config(repository: Arc<R>, auth: &AuthConfig) -> Self {
        let user_service = UserService::new(
            repository,
            Arc::new(BcryptPasswordHasher::new(auth.bcrypt_cost)),
            Arc::new(TokenService::new(TokenServiceConfig::from(&auth.jwt))),
            UserServiceConfig::from(auth),
        );
        Self::new(user_service)
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: UserRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/users")
                .route("/register", web::post().to(register::<R>))
                .route("/login", web::post().to(login::<R>))
                .route("/profile", web::get().to(profile::<R>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
