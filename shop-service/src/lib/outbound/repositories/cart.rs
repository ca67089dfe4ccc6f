use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::cart::errors::CartError;
use crate::domain::cart::models::AddItemCommand;
use crate::domain::cart::models::CartItem;
use crate::domain::cart::models::CartItemId;
use crate::domain::cart::models::ItemName;
use crate::domain::cart::models::Page;
use crate::domain::cart::models::Price;
use crate::domain::cart::models::Quantity;
use crate::domain::cart::models::UpdateItemCommand;
use crate::domain::cart::ports::CartRepository;
use crate::user::models::UserId;

pub struct PostgresCartRepository {
    pool: PgPool,
}

impl PostgresCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CartItemRow {
    id: i64,
    user_id: i64,
    item: String,
    quantity: i32,
    price: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CartItemRow> for CartItem {
    type Error = CartError;

    fn try_from(row: CartItemRow) -> Result<Self, Self::Error> {
        Ok(CartItem {
            id: CartItemId(row.id),
            user_id: UserId(row.user_id),
            item: ItemName::new(row.item)?,
            quantity: Quantity::new(row.quantity)?,
            price: Price::new(row.price)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const CART_ITEM_COLUMNS: &str = "id, user_id, item, quantity, price, created_at, updated_at";

#[async_trait]
impl CartRepository for PostgresCartRepository {
    async fn insert(
        &self,
        user_id: UserId,
        command: &AddItemCommand,
    ) -> Result<CartItem, CartError> {
        let row = sqlx::query_as::<_, CartItemRow>(&format!(
            r#"
            INSERT INTO cart_items (user_id, item, quantity, price)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            CART_ITEM_COLUMNS
        ))
        .bind(user_id.0)
        .bind(command.item.as_str())
        .bind(command.quantity.value())
        .bind(command.price.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        row.try_into()
    }

    async fn find(
        &self,
        user_id: UserId,
        item_id: CartItemId,
    ) -> Result<Option<CartItem>, CartError> {
        let row = sqlx::query_as::<_, CartItemRow>(&format!(
            r#"
            SELECT {}
            FROM cart_items
            WHERE id = $1 AND user_id = $2
            "#,
            CART_ITEM_COLUMNS
        ))
        .bind(item_id.0)
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        row.map(CartItem::try_from).transpose()
    }

    async fn list(&self, user_id: UserId, page: Page) -> Result<Vec<CartItem>, CartError> {
        let rows = sqlx::query_as::<_, CartItemRow>(&format!(
            r#"
            SELECT {}
            FROM cart_items
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            OFFSET $2 LIMIT $3
            "#,
            CART_ITEM_COLUMNS
        ))
        .bind(user_id.0)
        .bind(page.skip())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(CartItem::try_from).collect()
    }

    async fn list_all(&self, user_id: UserId) -> Result<Vec<CartItem>, CartError> {
        let rows = sqlx::query_as::<_, CartItemRow>(&format!(
            r#"
            SELECT {}
            FROM cart_items
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
            CART_ITEM_COLUMNS
        ))
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(CartItem::try_from).collect()
    }

    async fn update(
        &self,
        user_id: UserId,
        item_id: CartItemId,
        command: &UpdateItemCommand,
    ) -> Result<Option<CartItem>, CartError> {
        // Absent fields keep their stored values
        let row = sqlx::query_as::<_, CartItemRow>(&format!(
            r#"
            UPDATE cart_items
            SET quantity = COALESCE($3, quantity),
                price = COALESCE($4, price),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {}
            "#,
            CART_ITEM_COLUMNS
        ))
        .bind(item_id.0)
        .bind(user_id.0)
        .bind(command.quantity.map(|q| q.value()))
        .bind(command.price.map(|p| p.value()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        row.map(CartItem::try_from).transpose()
    }

    async fn delete(&self, user_id: UserId, item_id: CartItemId) -> Result<bool, CartError> {
        let result = sqlx::query(
            r#"
            DELETE FROM cart_items
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(item_id.0)
        .bind(user_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self, user_id: UserId) -> Result<u64, CartError> {
        let result = sqlx::query(
            r#"
            DELETE FROM cart_items
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
