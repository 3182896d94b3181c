//! Integration tests for the item repository.
//!
//! Exercises the repository against a real database:
//! - ID assignment on insert
//! - Unique constraint violations (insert and update) with no partial writes
//! - Full-replace update semantics
//! - List ordering, delete behaviour

use assert_matches::assert_matches;
use sqlx::PgPool;
use stockroom_db::models::item::ItemInput;
use stockroom_db::repositories::ItemRepo;
use stockroom_db::DbError;

fn widget(sku: &str) -> ItemInput {
    ItemInput {
        sku: sku.to_string(),
        name: "Widget".to_string(),
        amount: 10,
        price: 2.5,
        description: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_assigns_id_and_persists_all_fields(pool: PgPool) {
    let input = ItemInput {
        sku: "A1".to_string(),
        name: "Widget".to_string(),
        amount: 10,
        price: 2.5,
        description: Some("A fine widget".to_string()),
    };
    let item = ItemRepo::insert(&pool, &input).await.unwrap();

    assert!(item.id > 0);
    assert_eq!(item.sku, "A1");
    assert_eq!(item.name, "Widget");
    assert_eq!(item.amount, 10);
    assert_eq!(item.price, 2.5);
    assert_eq!(item.description.as_deref(), Some("A fine widget"));

    let fetched = ItemRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(fetched, item);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_duplicate_sku_fails_and_leaves_store_unchanged(pool: PgPool) {
    ItemRepo::insert(&pool, &widget("A1")).await.unwrap();

    let err = ItemRepo::insert(&pool, &widget("A1")).await.unwrap_err();
    assert_matches!(err, DbError::UniqueViolation { ref constraint } if constraint == "uq_items_sku");

    let items = ItemRepo::list_all(&pool).await.unwrap();
    assert_eq!(items.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_none_for_missing_row(pool: PgPool) {
    let found = ItemRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_all_returns_items_in_insertion_order(pool: PgPool) {
    let a = ItemRepo::insert(&pool, &widget("A1")).await.unwrap();
    let b = ItemRepo::insert(&pool, &widget("A2")).await.unwrap();
    let c = ItemRepo::insert(&pool, &widget("A3")).await.unwrap();

    let items = ItemRepo::list_all(&pool).await.unwrap();
    let ids: Vec<_> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_every_field(pool: PgPool) {
    let created = ItemRepo::insert(
        &pool,
        &ItemInput {
            sku: "A1".to_string(),
            name: "Widget".to_string(),
            amount: 10,
            price: 2.5,
            description: Some("old".to_string()),
        },
    )
    .await
    .unwrap();

    // Full replace: description omitted in the new payload becomes NULL.
    let replacement = ItemInput {
        sku: "A2".to_string(),
        name: "Gadget".to_string(),
        amount: 5,
        price: 3.0,
        description: None,
    };
    let updated = ItemRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.sku, "A2");
    assert_eq!(updated.name, "Gadget");
    assert_eq!(updated.amount, 5);
    assert_eq!(updated.price, 3.0);
    assert_eq!(updated.description, None);

    let fetched = ItemRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_row_returns_none(pool: PgPool) {
    let updated = ItemRepo::update(&pool, 999_999, &widget("A1")).await.unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_keeping_same_sku_succeeds(pool: PgPool) {
    let created = ItemRepo::insert(&pool, &widget("A1")).await.unwrap();

    let mut replacement = widget("A1");
    replacement.amount = 42;
    let updated = ItemRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.amount, 42);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_to_colliding_sku_fails_and_leaves_row_unchanged(pool: PgPool) {
    ItemRepo::insert(&pool, &widget("A1")).await.unwrap();
    let other = ItemRepo::insert(&pool, &widget("A2")).await.unwrap();

    let err = ItemRepo::update(&pool, other.id, &widget("A1"))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::UniqueViolation { ref constraint } if constraint == "uq_items_sku");

    let fetched = ItemRepo::find_by_id(&pool, other.id).await.unwrap().unwrap();
    assert_eq!(fetched.sku, "A2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_row_and_reports_missing_ids(pool: PgPool) {
    let created = ItemRepo::insert(&pool, &widget("A1")).await.unwrap();

    assert!(ItemRepo::delete(&pool, created.id).await.unwrap());
    assert!(ItemRepo::find_by_id(&pool, created.id).await.unwrap().is_none());

    // Deleting again is a reported miss, never a partial state change.
    assert!(!ItemRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ItemRepo::delete(&pool, 999_999).await.unwrap());
}
