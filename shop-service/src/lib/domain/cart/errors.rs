use thiserror::Error;

/// Error for ItemName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemNameError {
    #[error("Item name must not be empty")]
    Empty,

    #[error("Item name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Quantity validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Quantity must be between {min} and {max}, got {actual}")]
    OutOfRange { min: i32, max: i32, actual: i32 },
}

/// Error for Price validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("Price must not be negative")]
    Negative,
}

/// Error for pagination parameter validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Skip must not be negative, got {0}")]
    InvalidSkip(i64),

    #[error("Limit must be between 1 and {max}, got {actual}")]
    InvalidLimit { max: i64, actual: i64 },
}

/// Top-level error for all cart operations
#[derive(Debug, Clone, Error)]
pub enum CartError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid item name: {0}")]
    InvalidItemName(#[from] ItemNameError),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Invalid pagination: {0}")]
    InvalidPage(#[from] PageError),

    // Domain-level errors
    #[error("Cart item {0} not found")]
    NotFound(i64),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
