use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::cart::ports::CartServicePort;
use crate::domain::cart::models::CartItemId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn remove_item(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(item_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .cart_service
        .remove_item(current_user.0.id, CartItemId(item_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
