use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::cart::errors::CartError;
use crate::cart::models::AddItemCommand;
use crate::cart::models::CartItem;
use crate::cart::models::CartItemId;
use crate::cart::models::CartSummary;
use crate::cart::models::Page;
use crate::cart::models::UpdateItemCommand;
use crate::cart::ports::CartRepository;
use crate::cart::ports::CartServicePort;
use crate::user::models::UserId;

/// Domain service implementation for cart operations.
pub struct CartService<CR>
where
    CR: CartRepository,
{
    repository: Arc<CR>,
}

impl<CR> CartService<CR>
where
    CR: CartRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CartServicePort for CartService<CR>
where
    CR: CartRepository,
{
    async fn add_item(
        &self,
        user_id: UserId,
        command: AddItemCommand,
    ) -> Result<CartItem, CartError> {
        self.repository.insert(user_id, &command).await
    }

    async fn get_item(&self, user_id: UserId, item_id: CartItemId) -> Result<CartItem, CartError> {
        self.repository
            .find(user_id, item_id)
            .await?
            .ok_or(CartError::NotFound(item_id.0))
    }

    async fn list_items(&self, user_id: UserId, page: Page) -> Result<Vec<CartItem>, CartError> {
        self.repository.list(user_id, page).await
    }

    async fn update_item(
        &self,
        user_id: UserId,
        item_id: CartItemId,
        command: UpdateItemCommand,
    ) -> Result<CartItem, CartError> {
        self.repository
            .update(user_id, item_id, &command)
            .await?
            .ok_or(CartError::NotFound(item_id.0))
    }

    async fn remove_item(&self, user_id: UserId, item_id: CartItemId) -> Result<(), CartError> {
        let deleted = self.repository.delete(user_id, item_id).await?;
        if !deleted {
            return Err(CartError::NotFound(item_id.0));
        }
        Ok(())
    }

    async fn clear(&self, user_id: UserId) -> Result<u64, CartError> {
        self.repository.clear(user_id).await
    }

    async fn total_price(&self, user_id: UserId) -> Result<Decimal, CartError> {
        let items = self.repository.list_all(user_id).await?;
        Ok(items.iter().map(CartItem::total_price).sum())
    }

    async fn summary(&self, user_id: UserId) -> Result<CartSummary, CartError> {
        let items = self.repository.list_all(user_id).await?;
        let total_price = items.iter().map(CartItem::total_price).sum();

        Ok(CartSummary {
            total_items: items.len(),
            total_price,
            items,
        })
    }
}
