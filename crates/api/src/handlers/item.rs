//! Handlers for the `/items` resource.
//!
//! Every handler validates its payload before touching the store, then
//! translates repository outcomes into API-level results: a missing row
//! becomes 404 "Item not found", a SKU collision becomes 400
//! "SKU already exists".

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use stockroom_core::error::CoreError;
use stockroom_core::types::DbId;
use stockroom_db::models::item::{Item, ItemInput};
use stockroom_db::repositories::ItemRepo;
use stockroom_db::DbError;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /items
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> AppResult<(StatusCode, Json<Item>)> {
    validate(&input)?;
    let item = ItemRepo::insert(&state.pool, &input)
        .await
        .map_err(sku_conflict)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = ItemRepo::list_all(&state.pool).await?;
    Ok(Json(items))
}

/// GET /items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// PUT /items/{id}
///
/// Full replace: the payload must supply every field, and every field
/// overwrites the stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ItemInput>,
) -> AppResult<Json<Item>> {
    validate(&input)?;
    let item = ItemRepo::update(&state.pool, id, &input)
        .await
        .map_err(sku_conflict)?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// DELETE /items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ItemRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Item deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Item", id }))
    }
}

/// Structural payload validation. Runs before any store access.
///
/// Emptiness is exact (no trimming), matching the original
/// minimum-length-1 contract for `sku` and `name`.
fn validate(input: &ItemInput) -> Result<(), AppError> {
    if input.sku.is_empty() {
        return Err(validation_error("sku must not be empty"));
    }
    if input.name.is_empty() {
        return Err(validation_error("name must not be empty"));
    }
    if input.amount < 0 {
        return Err(validation_error("amount must not be negative"));
    }
    if input.price < 0.0 {
        return Err(validation_error("price must not be negative"));
    }
    Ok(())
}

fn validation_error(msg: &str) -> AppError {
    AppError::Core(CoreError::Validation(msg.to_string()))
}

/// Translate a unique-constraint violation into the endpoint's client error.
fn sku_conflict(err: DbError) -> AppError {
    match err {
        DbError::UniqueViolation { .. } => {
            AppError::Core(CoreError::Conflict("SKU already exists".to_string()))
        }
        other => AppError::Db(other),
    }
}
