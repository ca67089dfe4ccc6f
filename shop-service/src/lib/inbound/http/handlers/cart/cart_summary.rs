use axum::extract::State;
use axum::Extension;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use super::CartItemData;
use crate::cart::ports::CartServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn cart_summary(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<CartSummaryResponse>, ApiError> {
    let summary = state.cart_service.summary(current_user.0.id).await?;

    Ok(Json(CartSummaryResponse {
        total_items: summary.total_items,
        total_price: summary.total_price,
        items: summary.items.iter().map(CartItemData::from).collect(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummaryResponse {
    pub total_items: usize,
    pub total_price: Decimal,
    pub items: Vec<CartItemData>,
}
