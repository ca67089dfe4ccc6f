use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use super::CartItemData;
use crate::cart::errors::PriceError;
use crate::cart::errors::QuantityError;
use crate::cart::ports::CartServicePort;
use crate::domain::cart::models::CartItemId;
use crate::domain::cart::models::Price;
use crate::domain::cart::models::Quantity;
use crate::domain::cart::models::UpdateItemCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_item(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(item_id): Path<i64>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<Json<CartItemData>, ApiError> {
    let item = state
        .cart_service
        .update_item(current_user.0.id, CartItemId(item_id), body.try_into_command()?)
        .await?;

    Ok(Json(CartItemData::from(&item)))
}

/// HTTP request body for a partial cart item update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateItemRequest {
    quantity: Option<i32>,
    price: Option<Decimal>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateItemRequestError {
    #[error("Invalid quantity: {0}")]
    Quantity(#[from] QuantityError),

    #[error("Invalid price: {0}")]
    Price(#[from] PriceError),
}

impl UpdateItemRequest {
    fn try_into_command(self) -> Result<UpdateItemCommand, ParseUpdateItemRequestError> {
        Ok(UpdateItemCommand {
            quantity: self.quantity.map(Quantity::new).transpose()?,
            price: self.price.map(Price::new).transpose()?,
        })
    }
}

impl From<ParseUpdateItemRequestError> for ApiError {
    fn from(err: ParseUpdateItemRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
