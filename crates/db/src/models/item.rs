//! Inventory item model and request DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::types::DbId;

/// A row from the `items` table, as served to clients.
///
/// The table also carries `created_at`/`updated_at` audit columns; they are
/// not part of the wire representation and are not selected here.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    /// Stock Keeping Unit, the business-facing unique identifier.
    pub sku: String,
    pub name: String,
    /// Quantity in stock.
    pub amount: i32,
    pub price: f64,
    pub description: Option<String>,
}

/// Payload for creating an item, and for full-replace updates.
///
/// Same shape as [`Item`] minus `id`, which is assigned by the store.
/// Updates overwrite every field; there is no partial patch.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemInput {
    pub sku: String,
    pub name: String,
    pub amount: i32,
    pub price: f64,
    pub description: Option<String>,
}
