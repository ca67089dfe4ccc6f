use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UsernameError;
use crate::user::ports::AuthServicePort;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponseData>), ApiError> {
    let user = state.auth_service.register(body.try_into_command()?).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponseData::from(&user))))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(RegisterUserCommand::new(username, email, password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Outward-facing user representation; never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

impl From<&User> for RegisterResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            is_active: user.is_active,
        }
    }
}
