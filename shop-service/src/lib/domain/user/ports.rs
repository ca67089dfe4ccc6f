use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for authentication operations exposed to the inbound layer.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already registered
    /// * `EmailTaken` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown username and wrong password both fail with
    /// `InvalidCredentials`; the two cases are not distinguishable.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `InactiveAccount` - Credentials are correct but the account is inactive
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, username: &str, password: &str) -> Result<String, UserError>;

    /// Resolve the identity asserted by a bearer token.
    ///
    /// # Returns
    /// The credential record the token's subject resolves to
    ///
    /// # Errors
    /// * `Unauthorized` - Token invalid, expired, malformed, or subject unknown
    /// * `DatabaseError` - Store operation failed
    async fn authenticate(&self, token: &str) -> Result<User, UserError>;

    /// Issue a fresh token for an already-authenticated identity.
    ///
    /// No password re-verification takes place.
    async fn refresh(&self, current_user: &User) -> Result<String, UserError>;
}

/// Persistence operations for credential records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new credential record; the store assigns the identifier.
    ///
    /// Uniqueness of username and email is enforced by the store itself,
    /// so two concurrent inserts with the same username cannot both
    /// succeed even if both passed a prior existence check.
    ///
    /// # Errors
    /// * `UsernameTaken` - Username unique constraint violated
    /// * `EmailTaken` - Email unique constraint violated
    /// * `DatabaseError` - Store operation failed
    async fn insert(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve a credential record by username (case-sensitive exact match).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;

    /// Retrieve a credential record by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
