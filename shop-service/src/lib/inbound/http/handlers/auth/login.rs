use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;

/// Login is form-encoded for compatibility with OAuth2 password-flow
/// clients of the original API.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let access_token = state.auth_service.login(&form.username, &form.password).await?;

    Ok(Json(TokenResponse::bearer(access_token)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
