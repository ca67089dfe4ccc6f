use axum::extract::State;
use axum::Extension;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::ports::CartServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn cart_total(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<CartTotalResponse>, ApiError> {
    let total_price = state.cart_service.total_price(current_user.0.id).await?;

    Ok(Json(CartTotalResponse {
        user_id: current_user.0.id.0,
        total_price,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartTotalResponse {
    pub user_id: i64,
    pub total_price: Decimal,
}
