use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Authentication coordinator over a credential store.
///
/// Holds no cross-request state: the bearer token is the only artifact a
/// successful login produces, and it is entirely client-held.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    token_ttl: Duration,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl` - Validity window for issued tokens
    pub fn new(repository: Arc<UR>, jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(jwt_secret),
            token_ttl,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // The explicit lookups order the two duplicate errors; the unique
        // constraints behind `insert` close the race between concurrent
        // registrations.
        if self
            .repository
            .find_by_username(command.username.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::UsernameTaken(command.username.to_string()));
        }

        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailTaken(command.email.as_str().to_string()));
        }

        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        self.repository
            .insert(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
            })
            .await
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, UserError> {
        let user = self.repository.find_by_username(username).await?;

        let Some(user) = user else {
            return Err(UserError::InvalidCredentials);
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(UserError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(UserError::InactiveAccount);
        }

        self.token_codec
            .issue(user.username.as_str(), self.token_ttl)
            .map_err(|e| UserError::Unknown(format!("Token issuance failed: {}", e)))
    }

    async fn authenticate(&self, token: &str) -> Result<User, UserError> {
        let claims = self.token_codec.decode(token).map_err(|e| {
            tracing::debug!("Token validation failed: {}", e);
            UserError::Unauthorized
        })?;

        self.repository
            .find_by_username(&claims.sub)
            .await?
            .ok_or(UserError::Unauthorized)
    }

    async fn refresh(&self, current_user: &User) -> Result<String, UserError> {
        self.token_codec
            .issue(current_user.username.as_str(), self.token_ttl)
            .map_err(|e| UserError::Unknown(format!("Token issuance failed: {}", e)))
    }
}
