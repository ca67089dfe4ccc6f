use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::CartItemData;
use crate::cart::ports::CartServicePort;
use crate::domain::cart::models::CartItemId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn get_item(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(item_id): Path<i64>,
) -> Result<Json<CartItemData>, ApiError> {
    let item = state
        .cart_service
        .get_item(current_user.0.id, CartItemId(item_id))
        .await?;

    Ok(Json(CartItemData::from(&item)))
}
