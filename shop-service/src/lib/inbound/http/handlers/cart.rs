use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::cart::models::CartItem;

pub mod add_item;
pub mod cart_summary;
pub mod cart_total;
pub mod clear_cart;
pub mod get_item;
pub mod list_items;
pub mod remove_item;
pub mod update_item;

/// Wire representation of a cart line item, shared by the cart handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemData {
    pub id: i64,
    pub item: String,
    pub quantity: i32,
    pub price: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&CartItem> for CartItemData {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.0,
            item: item.item.as_str().to_string(),
            quantity: item.quantity.value(),
            price: item.price.value(),
            total_price: item.total_price(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
