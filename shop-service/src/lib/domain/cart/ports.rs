use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::cart::errors::CartError;
use crate::cart::models::AddItemCommand;
use crate::cart::models::CartItem;
use crate::cart::models::CartItemId;
use crate::cart::models::CartSummary;
use crate::cart::models::Page;
use crate::cart::models::UpdateItemCommand;
use crate::user::models::UserId;

/// Port for cart operations exposed to the inbound layer.
///
/// Every operation is scoped to the authenticated owner's `UserId`; the
/// identifier always comes from the access gate, never from request bodies.
#[async_trait]
pub trait CartServicePort: Send + Sync + 'static {
    /// Add an item to the user's cart.
    async fn add_item(
        &self,
        user_id: UserId,
        command: AddItemCommand,
    ) -> Result<CartItem, CartError>;

    /// Retrieve a single cart item.
    ///
    /// # Errors
    /// * `NotFound` - No such item in this user's cart
    async fn get_item(&self, user_id: UserId, item_id: CartItemId) -> Result<CartItem, CartError>;

    /// List the user's cart items, newest first.
    async fn list_items(&self, user_id: UserId, page: Page) -> Result<Vec<CartItem>, CartError>;

    /// Apply a partial update to a cart item.
    ///
    /// # Errors
    /// * `NotFound` - No such item in this user's cart
    async fn update_item(
        &self,
        user_id: UserId,
        item_id: CartItemId,
        command: UpdateItemCommand,
    ) -> Result<CartItem, CartError>;

    /// Remove a cart item.
    ///
    /// # Errors
    /// * `NotFound` - No such item in this user's cart
    async fn remove_item(&self, user_id: UserId, item_id: CartItemId) -> Result<(), CartError>;

    /// Remove every item from the user's cart.
    ///
    /// # Returns
    /// Number of items removed
    async fn clear(&self, user_id: UserId) -> Result<u64, CartError>;

    /// Sum of line totals over the whole cart.
    async fn total_price(&self, user_id: UserId) -> Result<Decimal, CartError>;

    /// Full cart summary: item count, grand total, and line items.
    async fn summary(&self, user_id: UserId) -> Result<CartSummary, CartError>;
}

/// Persistence operations for cart items.
#[async_trait]
pub trait CartRepository: Send + Sync + 'static {
    /// Persist a new cart item for the given owner; the store assigns the
    /// identifier and timestamps.
    async fn insert(
        &self,
        user_id: UserId,
        command: &AddItemCommand,
    ) -> Result<CartItem, CartError>;

    /// Retrieve one item, constrained to the given owner.
    async fn find(
        &self,
        user_id: UserId,
        item_id: CartItemId,
    ) -> Result<Option<CartItem>, CartError>;

    /// List the owner's items with pagination, newest first.
    async fn list(&self, user_id: UserId, page: Page) -> Result<Vec<CartItem>, CartError>;

    /// List all of the owner's items, newest first.
    async fn list_all(&self, user_id: UserId) -> Result<Vec<CartItem>, CartError>;

    /// Apply a partial update, constrained to the given owner.
    ///
    /// # Returns
    /// The updated item, or None if the owner has no such item
    async fn update(
        &self,
        user_id: UserId,
        item_id: CartItemId,
        command: &UpdateItemCommand,
    ) -> Result<Option<CartItem>, CartError>;

    /// Delete one item, constrained to the given owner.
    ///
    /// # Returns
    /// True if a row was deleted
    async fn delete(&self, user_id: UserId, item_id: CartItemId) -> Result<bool, CartError>;

    /// Delete all of the owner's items.
    ///
    /// # Returns
    /// Number of rows deleted
    async fn clear(&self, user_id: UserId) -> Result<u64, CartError>;
}
