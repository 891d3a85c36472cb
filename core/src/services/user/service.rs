//! User service implementing the account workflows

use std::sync::Arc;

use ga_shared::phone::mask_phone_number;
use tracing::{debug, info, instrument};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse, Tokens,
};
use crate::errors::{DomainError, ErrorKind};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;

use super::config::UserServiceConfig;
use super::deadline::with_deadline;
use super::traits::AuthTokenService;
use super::validator::UserValidator;

/// Registration, login and profile workflows
///
/// Holds no per-request state; one instance is shared by all requests.
pub struct UserService<R, H, A>
where
    R: UserRepository,
    H: PasswordHasher,
    A: AuthTokenService,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<A>,
    validator: UserValidator<R>,
    config: UserServiceConfig,
}

impl<R, H, A> UserService<R, H, A>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
    A: AuthTokenService + 'static,
{
    pub fn new(repository: Arc<R>, hasher: Arc<H>, tokens: Arc<A>, config: UserServiceConfig) -> Self {
        let validator = UserValidator::new(Arc::clone(&repository), config.storage_timeout);
        Self {
            repository,
            hasher,
            tokens,
            validator,
            config,
        }
    }

    /// Creates an account
    ///
    /// Either exactly one user is stored and its public projection returned,
    /// or nothing is written.
    #[instrument(skip_all, fields(phone = %mask_phone_number(&request.phone_number)))]
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, DomainError> {
        const OP: &str = "user_service::register";

        self.validator
            .validate_register_request(&request)
            .await
            .map_err(|e| e.wrap(OP))?;

        let RegisterRequest {
            phone_number,
            name,
            password,
        } = request;

        let password_hash = self.hash_password(password).await.map_err(|e| e.wrap(OP))?;
        let user = User::new(name, phone_number, password_hash);

        let created = with_deadline(self.config.storage_timeout, OP, self.repository.register(user))
            .await
            .map_err(|e| e.wrap(OP))?;

        info!(user_id = created.id, "user registered");
        Ok(RegisterResponse {
            user: created.info(),
        })
    }

    /// Verifies credentials and issues a token pair
    ///
    /// An unknown phone number and a wrong password fail identically.
    #[instrument(skip_all, fields(phone = %mask_phone_number(&request.phone_number)))]
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, DomainError> {
        const OP: &str = "user_service::login";

        let lookup = with_deadline(
            self.config.storage_timeout,
            OP,
            self.repository.get_user_by_phone_number(&request.phone_number),
        )
        .await;

        let user = match lookup {
            Ok(user) => user,
            Err(e) if e.is(ErrorKind::NotFound) => {
                debug!("login for unknown phone number");
                return Err(DomainError::invalid_credentials(OP));
            }
            Err(e) => return Err(e.wrap(OP)),
        };

        let matches = self
            .verify_password(request.password, user.password_hash.clone())
            .await
            .map_err(|e| e.wrap(OP))?;
        if !matches {
            debug!(user_id = user.id, "login with wrong password");
            return Err(DomainError::invalid_credentials(OP));
        }

        let access_token = self
            .tokens
            .create_access_token(user.id)
            .map_err(|e| DomainError::internal(OP).with_source(e))?;
        let refresh_token = self
            .tokens
            .create_refresh_token()
            .map_err(|e| DomainError::internal(OP).with_source(e))?;

        info!(user_id = user.id, "user logged in");
        Ok(LoginResponse {
            user: user.info(),
            tokens: Tokens {
                access_token,
                refresh_token,
            },
        })
    }

    /// Resolves the profile of the account an access token was issued for
    #[instrument(skip_all)]
    pub async fn profile(&self, bearer_token: &str) -> Result<ProfileResponse, DomainError> {
        const OP: &str = "user_service::profile";

        let claims = self
            .tokens
            .parse_access_token(bearer_token)
            .map_err(|e| DomainError::unauthorized(OP).with_source(e))?;

        let user = with_deadline(
            self.config.storage_timeout,
            OP,
            self.repository.get_user_by_id(claims.user_id),
        )
        .await
        .map_err(|e| e.wrap(OP))?;

        Ok(ProfileResponse { name: user.name })
    }

    async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        const OP: &str = "user_service::hash_password";

        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(OP).with_source(e))?
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, DomainError> {
        const OP: &str = "user_service::verify_password";

        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::internal(OP).with_source(e))
    }
}
