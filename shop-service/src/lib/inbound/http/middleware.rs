use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;

/// Identity resolved by the access gate, bound to the request for the
/// remainder of its processing. Handlers receive it as an explicit
/// `Extension<CurrentUser>` parameter; downstream data access filters by
/// this identity only, never by anything the client put in the body.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Access gate middleware for protected routes.
///
/// Extracts the bearer token, resolves it to a credential record, and
/// rejects the request with 401 before any handler logic runs when the
/// token is missing, malformed, expired, or resolves to no known user.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let user = state.auth_service.authenticate(token).await.map_err(|e| {
        tracing::warn!("Request authentication failed: {}", e);
        ApiError::from(e).into_response()
    })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let not_authenticated =
        || ApiError::Unauthorized("Not authenticated".to_string()).into_response();

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(not_authenticated)?;

    let auth_str = auth_header.to_str().map_err(|_| not_authenticated())?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(not_authenticated)
}
