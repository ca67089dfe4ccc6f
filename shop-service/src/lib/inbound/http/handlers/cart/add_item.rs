use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use super::CartItemData;
use crate::cart::errors::ItemNameError;
use crate::cart::errors::PriceError;
use crate::cart::errors::QuantityError;
use crate::cart::ports::CartServicePort;
use crate::domain::cart::models::AddItemCommand;
use crate::domain::cart::models::ItemName;
use crate::domain::cart::models::Price;
use crate::domain::cart::models::Quantity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn add_item(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<CartItemData>), ApiError> {
    let item = state
        .cart_service
        .add_item(current_user.0.id, body.try_into_command()?)
        .await?;

    Ok((StatusCode::CREATED, Json(CartItemData::from(&item))))
}

/// HTTP request body for adding a cart item (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddItemRequest {
    item: String,
    #[serde(default = "default_quantity")]
    quantity: i32,
    price: Decimal,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, Error)]
enum ParseAddItemRequestError {
    #[error("Invalid item name: {0}")]
    ItemName(#[from] ItemNameError),

    #[error("Invalid quantity: {0}")]
    Quantity(#[from] QuantityError),

    #[error("Invalid price: {0}")]
    Price(#[from] PriceError),
}

impl AddItemRequest {
    fn try_into_command(self) -> Result<AddItemCommand, ParseAddItemRequestError> {
        Ok(AddItemCommand {
            item: ItemName::new(self.item)?,
            quantity: Quantity::new(self.quantity)?,
            price: Price::new(self.price)?,
        })
    }
}

impl From<ParseAddItemRequestError> for ApiError {
    fn from(err: ParseAddItemRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
