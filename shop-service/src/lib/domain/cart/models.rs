use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::cart::errors::ItemNameError;
use crate::cart::errors::PageError;
use crate::cart::errors::PriceError;
use crate::cart::errors::QuantityError;
use crate::user::models::UserId;

/// Cart line item aggregate.
///
/// Always owned by exactly one user; every query against the store is
/// filtered by the owner's identifier.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub item: ItemName,
    pub quantity: Quantity,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItem {
    /// Line total: unit price times quantity.
    pub fn total_price(&self) -> Decimal {
        self.price.value() * Decimal::from(self.quantity.value())
    }
}

/// Cart item unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartItemId(pub i64);

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product name value type, 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    const MAX_LENGTH: usize = 100;

    /// # Errors
    /// * `Empty` - Name is an empty string
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, ItemNameError> {
        let length = name.chars().count();
        if length == 0 {
            Err(ItemNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ItemNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Quantity value type, 1-1000 units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i32);

impl Quantity {
    const MIN: i32 = 1;
    const MAX: i32 = 1000;

    /// # Errors
    /// * `OutOfRange` - Quantity outside 1..=1000
    pub fn new(quantity: i32) -> Result<Self, QuantityError> {
        if (Self::MIN..=Self::MAX).contains(&quantity) {
            Ok(Self(quantity))
        } else {
            Err(QuantityError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: quantity,
            })
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Non-negative unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(Decimal);

impl Price {
    /// # Errors
    /// * `Negative` - Price below zero
    pub fn new(price: Decimal) -> Result<Self, PriceError> {
        if price.is_sign_negative() {
            Err(PriceError::Negative)
        } else {
            Ok(Self(price))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Validated pagination window for cart listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: i64,
    limit: i64,
}

impl Page {
    pub const DEFAULT_LIMIT: i64 = 100;
    const MAX_LIMIT: i64 = 200;

    /// # Errors
    /// * `InvalidSkip` - Skip is negative
    /// * `InvalidLimit` - Limit outside 1..=200
    pub fn new(skip: i64, limit: i64) -> Result<Self, PageError> {
        if skip < 0 {
            return Err(PageError::InvalidSkip(skip));
        }
        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(PageError::InvalidLimit {
                max: Self::MAX_LIMIT,
                actual: limit,
            });
        }
        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Command to add an item to the current user's cart
#[derive(Debug, Clone)]
pub struct AddItemCommand {
    pub item: ItemName,
    pub quantity: Quantity,
    pub price: Price,
}

/// Command to update an existing cart item with optional fields.
///
/// Only provided fields are changed; the rest keep their stored values.
#[derive(Debug, Clone)]
pub struct UpdateItemCommand {
    pub quantity: Option<Quantity>,
    pub price: Option<Price>,
}

/// Aggregated view over a user's whole cart.
#[derive(Debug, Clone)]
pub struct CartSummary {
    pub total_items: usize,
    pub total_price: Decimal,
    pub items: Vec<CartItem>,
}
