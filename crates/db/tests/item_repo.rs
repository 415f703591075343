//! Integration tests for `ItemRepo` against a migrated SQLite database.

use items_db::models::item::{CreateItem, UpdateItem};
use items_db::repositories::ItemRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(name: &str, description: Option<&str>) -> CreateItem {
    CreateItem {
        name: Some(name.to_string()),
        description: description.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_assigns_id_and_defaults_description(pool: SqlitePool) {
    let item = ItemRepo::create(&pool, &new_item("Widget", None))
        .await
        .unwrap();

    assert!(item.id > 0);
    assert_eq!(item.name, "Widget");
    assert_eq!(item.description, "");

    let found = ItemRepo::find_by_id(&pool, item.id).await.unwrap();
    assert_eq!(found, Some(item));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_assigns_distinct_ids(pool: SqlitePool) {
    let a = ItemRepo::create(&pool, &new_item("A", None)).await.unwrap();
    let b = ItemRepo::create(&pool, &new_item("B", None)).await.unwrap();
    assert_ne!(a.id, b.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_blank_name_violates_check_constraint(pool: SqlitePool) {
    let result = ItemRepo::create(&pool, &new_item("  ", None)).await;
    assert!(matches!(result, Err(sqlx::Error::Database(_))));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_missing_returns_none(pool: SqlitePool) {
    let found = ItemRepo::find_by_id(&pool, 424242).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_every_item(pool: SqlitePool) {
    assert!(ItemRepo::list(&pool).await.unwrap().is_empty());

    for i in 0..3 {
        ItemRepo::create(&pool, &new_item(&format!("Item {i}"), Some("d")))
            .await
            .unwrap();
    }

    let items = ItemRepo::list(&pool).await.unwrap();
    assert_eq!(items.len(), 3);
    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Item 0", "Item 1", "Item 2"]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_given_fields(pool: SqlitePool) {
    let item = ItemRepo::create(&pool, &new_item("Before", Some("keep me")))
        .await
        .unwrap();

    let updated = ItemRepo::update(
        &pool,
        item.id,
        &UpdateItem {
            name: Some("After".into()),
            description: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.id, item.id);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.description, "keep me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_returns_none(pool: SqlitePool) {
    let result = ItemRepo::update(
        &pool,
        424242,
        &UpdateItem {
            name: Some("Nope".into()),
            description: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_row_once(pool: SqlitePool) {
    let item = ItemRepo::create(&pool, &new_item("Doomed", None))
        .await
        .unwrap();

    assert!(ItemRepo::delete(&pool, item.id).await.unwrap());
    assert!(!ItemRepo::delete(&pool, item.id).await.unwrap());
    assert!(ItemRepo::find_by_id(&pool, item.id).await.unwrap().is_none());
}
