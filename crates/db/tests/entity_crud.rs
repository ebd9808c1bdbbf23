//! Integration tests for entity CRUD over the repository layer.
//!
//! Exercises create/read/update/delete per entity against a real database:
//! declared defaults, partial updates, sentinel returns for absent IDs, and
//! foreign key enforcement.

use sqlx::PgPool;

use hub_db::models::category::{CreateCategory, UpdateCategory};
use hub_db::models::content_block::{CreateContentBlock, UpdateContentBlock};
use hub_db::models::resource::{CreateResource, UpdateResource};
use hub_db::repositories::{BlockUpdateOutcome, CategoryRepo, ContentBlockRepo, ResourceRepo};

mod helpers;
use helpers::{new_block, new_category, new_resource};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_category_applies_defaults_and_round_trips(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Pré-Evento"))
        .await
        .unwrap();
    assert_eq!(created.name, "Pré-Evento");
    assert_eq!(created.icon, None);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = CategoryRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.icon, created.icon);
    assert_eq!(fetched.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_category_changes_only_provided_fields(pool: PgPool) {
    let created = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Durante o Evento".to_string(),
            icon: Some("Calendar".to_string()),
        },
    )
    .await
    .unwrap();

    let updated = CategoryRepo::update(
        &pool,
        created.id,
        &UpdateCategory {
            name: Some("Durante".to_string()),
            icon: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Durante");
    // Unspecified field untouched.
    assert_eq!(updated.icon.as_deref(), Some("Calendar"));
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn absent_category_id_is_a_sentinel_not_an_error(pool: PgPool) {
    assert!(CategoryRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
    assert!(CategoryRepo::update(&pool, 9999, &UpdateCategory::default())
        .await
        .unwrap()
        .is_none());
    assert!(!CategoryRepo::delete_cascade(&pool, 9999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_resource_defaults_read_time_to_five(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Pré-Evento"))
        .await
        .unwrap();

    let resource = ResourceRepo::create(&pool, &new_resource(category.id, "Checklist"))
        .await
        .unwrap();
    assert_eq!(resource.read_time, 5);
    assert_eq!(resource.category_id, category.id);
    assert_eq!(resource.description, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_resource_honours_explicit_read_time(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Pré-Evento"))
        .await
        .unwrap();

    let resource = ResourceRepo::create(
        &pool,
        &CreateResource {
            title: "Orientações de Montagem".to_string(),
            description: Some("Instruções detalhadas".to_string()),
            category_id: category.id,
            read_time: Some(8),
        },
    )
    .await
    .unwrap();
    assert_eq!(resource.read_time, 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_resource_with_dangling_category_is_rejected(pool: PgPool) {
    let err = ResourceRepo::create(&pool, &new_resource(424242, "Orphan"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_category_filters(pool: PgPool) {
    let a = CategoryRepo::create(&pool, &new_category("A")).await.unwrap();
    let b = CategoryRepo::create(&pool, &new_category("B")).await.unwrap();
    let in_a = ResourceRepo::create(&pool, &new_resource(a.id, "In A"))
        .await
        .unwrap();
    ResourceRepo::create(&pool, &new_resource(b.id, "In B"))
        .await
        .unwrap();

    let listed = ResourceRepo::list_by_category(&pool, a.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, in_a.id);

    let all = ResourceRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reassigning_resource_to_dangling_category_is_rejected(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("A")).await.unwrap();
    let resource = ResourceRepo::create(&pool, &new_resource(category.id, "R"))
        .await
        .unwrap();

    let err = ResourceRepo::update(
        &pool,
        resource.id,
        &UpdateResource {
            category_id: Some(424242),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

// ---------------------------------------------------------------------------
// Content blocks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn block_content_round_trips_verbatim(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("A")).await.unwrap();
    let resource = ResourceRepo::create(&pool, &new_resource(category.id, "R"))
        .await
        .unwrap();

    let content = serde_json::json!({
        "items": [
            { "id": "1", "text": "Banners", "checked": false },
            { "id": "2", "text": "Cartões", "checked": true, "extraKey": "preserved" }
        ]
    });
    let created = ContentBlockRepo::create(
        &pool,
        &CreateContentBlock {
            resource_id: resource.id,
            block_type: "checklist".to_string(),
            title: Some("Checklist".to_string()),
            description: None,
            content: content.clone(),
            sort_order: 0,
        },
    )
    .await
    .unwrap();

    let fetched = ContentBlockRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.content, content);
    assert_eq!(fetched.block_type, "checklist");
    assert_eq!(fetched.sort_order, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn block_type_outside_enum_is_rejected_by_check_constraint(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("A")).await.unwrap();
    let resource = ResourceRepo::create(&pool, &new_resource(category.id, "R"))
        .await
        .unwrap();

    let err = ContentBlockRepo::create(&pool, &new_block(resource.id, "image", 0))
        .await
        .unwrap_err();
    assert!(err.as_database_error().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn block_update_checks_the_merged_pair_inside_the_transaction(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("A")).await.unwrap();
    let resource = ResourceRepo::create(&pool, &new_resource(category.id, "R"))
        .await
        .unwrap();
    let block = ContentBlockRepo::create(&pool, &new_block(resource.id, "text", 0))
        .await
        .unwrap();

    // Retyping without a matching payload is refused and the row is
    // untouched.
    let outcome = ContentBlockRepo::update(
        &pool,
        block.id,
        &UpdateContentBlock {
            block_type: Some("checklist".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(matches!(outcome, BlockUpdateOutcome::Invalid(_)));
    let fetched = ContentBlockRepo::find_by_id(&pool, block.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.block_type, "text");
    assert_eq!(fetched.content, block.content);

    // A matching pair goes through.
    let outcome = ContentBlockRepo::update(
        &pool,
        block.id,
        &UpdateContentBlock {
            block_type: Some("checklist".to_string()),
            content: Some(serde_json::json!({ "items": [] })),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let BlockUpdateOutcome::Updated(updated) = outcome else {
        panic!("expected updated outcome");
    };
    assert_eq!(updated.block_type, "checklist");

    // Unknown IDs report as such.
    let outcome = ContentBlockRepo::update(&pool, 9999, &UpdateContentBlock::default())
        .await
        .unwrap();
    assert!(matches!(outcome, BlockUpdateOutcome::NotFound));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_block_reports_existence(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("A")).await.unwrap();
    let resource = ResourceRepo::create(&pool, &new_resource(category.id, "R"))
        .await
        .unwrap();
    let block = ContentBlockRepo::create(&pool, &new_block(resource.id, "text", 0))
        .await
        .unwrap();

    assert!(ContentBlockRepo::delete(&pool, block.id).await.unwrap());
    assert!(!ContentBlockRepo::delete(&pool, block.id).await.unwrap());
}
