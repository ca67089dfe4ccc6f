use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::login::TokenResponse;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;

/// Issue a fresh token for the already-authenticated caller.
pub async fn refresh(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<TokenResponse>, ApiError> {
    let access_token = state.auth_service.refresh(&current_user.0).await?;

    Ok(Json(TokenResponse::bearer(access_token)))
}
