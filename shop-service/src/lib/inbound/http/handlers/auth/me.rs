use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;

pub async fn me(
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<MeResponseData>, ApiError> {
    Ok(Json(MeResponseData::from(&current_user.0)))
}

/// Outward-facing user representation; never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

impl From<&User> for MeResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            is_active: user.is_active,
        }
    }
}
