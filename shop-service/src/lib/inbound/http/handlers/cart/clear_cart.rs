use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::cart::ports::CartServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn clear_cart(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<ClearCartResponse>, ApiError> {
    let deleted = state.cart_service.clear(current_user.0.id).await?;

    Ok(Json(ClearCartResponse {
        message: format!("Cart cleared. Items removed: {}", deleted),
        deleted,
        user_id: current_user.0.id.0,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearCartResponse {
    pub message: String,
    pub deleted: u64,
    pub user_id: i64,
}
