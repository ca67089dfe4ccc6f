use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::cart::errors::CartError;
use crate::user::errors::UserError;

pub mod auth;
pub mod cart;

/// Error half of every handler result.
///
/// Serialized in the wire format existing API clients expect: a JSON
/// object with a single `detail` field. 401 responses additionally carry
/// a `WWW-Authenticate: Bearer` challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    UnprocessableEntity(String),
    InternalServerError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ApiErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Unauthorized(detail) => (StatusCode::UNAUTHORIZED, detail),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::UnprocessableEntity(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            ApiError::InternalServerError(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        };

        let mut response = (status, Json(ApiErrorBody { detail })).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::UsernameTaken(_) => {
                ApiError::BadRequest("Username already registered".to_string())
            }
            UserError::EmailTaken(_) => {
                ApiError::BadRequest("Email already registered".to_string())
            }
            UserError::InvalidCredentials => {
                ApiError::Unauthorized("Incorrect username or password".to_string())
            }
            UserError::InactiveAccount => ApiError::BadRequest("Inactive user".to_string()),
            UserError::Unauthorized => {
                ApiError::Unauthorized("Could not validate credentials".to_string())
            }
            UserError::DatabaseError(_) | UserError::Unknown(_) => {
                // Internal detail stays in the logs, not in the response
                tracing::error!("Request failed: {}", err);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::InvalidItemName(_)
            | CartError::InvalidQuantity(_)
            | CartError::InvalidPrice(_)
            | CartError::InvalidPage(_) => ApiError::UnprocessableEntity(err.to_string()),
            CartError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CartError::DatabaseError(_) => {
                tracing::error!("Request failed: {}", err);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}
