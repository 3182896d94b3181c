//! Repository for the `items` table.
//!
//! SKU uniqueness is enforced by the `uq_items_sku` constraint; a colliding
//! write surfaces as [`DbError::UniqueViolation`] and leaves the store
//! unchanged. Every write here is a single statement and therefore atomic.

use sqlx::PgPool;
use stockroom_core::types::DbId;

use crate::error::DbError;
use crate::models::item::{Item, ItemInput};

/// Column list for `items` queries. Excludes audit columns.
const ITEM_COLUMNS: &str = "id, sku, name, amount, price, description";

/// Provides CRUD operations for inventory items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item. The `id` is assigned by the database.
    pub async fn insert(pool: &PgPool, input: &ItemInput) -> Result<Item, DbError> {
        let query = format!(
            "INSERT INTO items (sku, name, amount, price, description) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ITEM_COLUMNS}"
        );
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(&input.sku)
            .bind(&input.name)
            .bind(input.amount)
            .bind(input.price)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok(item)
    }

    /// List every item in insertion (primary-key) order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Item>, DbError> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY id");
        let items = sqlx::query_as::<_, Item>(&query).fetch_all(pool).await?;
        Ok(items)
    }

    /// Find an item by its ID. Returns `None` if no such row exists.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, DbError> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1");
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(item)
    }

    /// Replace every mutable field of the item with the given ID.
    ///
    /// Returns `None` if no such row exists. A SKU collision with a
    /// different row fails with [`DbError::UniqueViolation`] and leaves the
    /// original row untouched.
    pub async fn update(pool: &PgPool, id: DbId, input: &ItemInput) -> Result<Option<Item>, DbError> {
        let query = format!(
            "UPDATE items SET \
                 sku = $2, name = $3, amount = $4, price = $5, description = $6, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ITEM_COLUMNS}"
        );
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.sku)
            .bind(&input.name)
            .bind(input.amount)
            .bind(input.price)
            .bind(&input.description)
            .fetch_optional(pool)
            .await?;
        Ok(item)
    }

    /// Delete the item with the given ID. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
