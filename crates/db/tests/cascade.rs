//! Integration tests for cascade deletes and category reassignment.

use sqlx::PgPool;

use hub_db::models::resource::UpdateResource;
use hub_db::repositories::{CategoryRepo, ContentBlockRepo, ResourceRepo};

mod helpers;
use helpers::{new_block, new_category, new_resource};

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_category_removes_resources_and_their_blocks(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Pré-Evento"))
        .await
        .unwrap();
    let r1 = ResourceRepo::create(&pool, &new_resource(category.id, "Checklist"))
        .await
        .unwrap();
    let r2 = ResourceRepo::create(&pool, &new_resource(category.id, "Documentos"))
        .await
        .unwrap();
    let b1 = ContentBlockRepo::create(&pool, &new_block(r1.id, "text", 0))
        .await
        .unwrap();
    let b2 = ContentBlockRepo::create(&pool, &new_block(r2.id, "alert", 0))
        .await
        .unwrap();

    // Unrelated data must survive.
    let other = CategoryRepo::create(&pool, &new_category("Durante o Evento"))
        .await
        .unwrap();
    let other_resource = ResourceRepo::create(&pool, &new_resource(other.id, "Horários"))
        .await
        .unwrap();

    assert!(CategoryRepo::delete_cascade(&pool, category.id)
        .await
        .unwrap());

    assert!(CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .is_none());
    assert!(ResourceRepo::find_by_id(&pool, r1.id).await.unwrap().is_none());
    assert!(ResourceRepo::find_by_id(&pool, r2.id).await.unwrap().is_none());
    assert!(ContentBlockRepo::find_by_id(&pool, b1.id)
        .await
        .unwrap()
        .is_none());
    assert!(ContentBlockRepo::find_by_id(&pool, b2.id)
        .await
        .unwrap()
        .is_none());

    assert!(CategoryRepo::find_by_id(&pool, other.id)
        .await
        .unwrap()
        .is_some());
    assert!(ResourceRepo::find_by_id(&pool, other_resource.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_resource_removes_its_blocks_only(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Pré-Evento"))
        .await
        .unwrap();
    let resource = ResourceRepo::create(&pool, &new_resource(category.id, "Checklist"))
        .await
        .unwrap();
    let sibling = ResourceRepo::create(&pool, &new_resource(category.id, "Documentos"))
        .await
        .unwrap();
    let block = ContentBlockRepo::create(&pool, &new_block(resource.id, "text", 0))
        .await
        .unwrap();
    let sibling_block = ContentBlockRepo::create(&pool, &new_block(sibling.id, "text", 0))
        .await
        .unwrap();

    assert!(ResourceRepo::delete_cascade(&pool, resource.id)
        .await
        .unwrap());

    assert!(ResourceRepo::find_by_id(&pool, resource.id)
        .await
        .unwrap()
        .is_none());
    assert!(ContentBlockRepo::find_by_id(&pool, block.id)
        .await
        .unwrap()
        .is_none());
    // The category and the sibling resource are untouched.
    assert!(CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .is_some());
    assert!(ContentBlockRepo::find_by_id(&pool, sibling_block.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reassignment_changes_only_category_and_updated_at(pool: PgPool) {
    let from = CategoryRepo::create(&pool, &new_category("From")).await.unwrap();
    let to = CategoryRepo::create(&pool, &new_category("To")).await.unwrap();
    let before = ResourceRepo::create(
        &pool,
        &hub_db::models::resource::CreateResource {
            title: "Checklist".to_string(),
            description: Some("Uma descrição".to_string()),
            category_id: from.id,
            read_time: Some(7),
        },
    )
    .await
    .unwrap();

    let after = ResourceRepo::update(
        &pool,
        before.id,
        &UpdateResource {
            category_id: Some(to.id),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    // Frame property: everything except category_id and updated_at unchanged.
    assert_eq!(after.category_id, to.id);
    assert_eq!(after.id, before.id);
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.read_time, before.read_time);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);

    // Filtered listings reflect the move.
    let in_from = ResourceRepo::list_by_category(&pool, from.id).await.unwrap();
    assert!(in_from.is_empty());
    let in_to = ResourceRepo::list_by_category(&pool, to.id).await.unwrap();
    assert_eq!(in_to.len(), 1);
    assert_eq!(in_to[0].id, before.id);

    // The resource's blocks stay attached through the move.
    let block = ContentBlockRepo::create(&pool, &new_block(before.id, "text", 0))
        .await
        .unwrap();
    let blocks = ContentBlockRepo::list_by_resource(&pool, before.id)
        .await
        .unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].id, block.id);
}
