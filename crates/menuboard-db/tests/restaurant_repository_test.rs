//! Integration tests for the Restaurant repository using in-memory
//! SurrealDB.

use menuboard_core::error::MenuError;
use menuboard_core::models::menu_item::CreateMenuItem;
use menuboard_core::models::restaurant::{CreateRestaurant, UpdateRestaurant};
use menuboard_core::repository::{MenuItemRepository, RestaurantRepository};
use menuboard_db::repository::{SurrealMenuItemRepository, SurrealRestaurantRepository};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    menuboard_db::run_migrations(&db).await.unwrap();
    db
}

fn bella() -> CreateRestaurant {
    CreateRestaurant {
        name: "Bella".into(),
        email: "b@x.com".into(),
        slug: "bella-1".into(),
        password: "pw123456".into(),
    }
}

#[tokio::test]
async fn create_and_get_restaurant() {
    let repo = SurrealRestaurantRepository::new(setup().await);

    let created = repo.create(bella()).await.unwrap();
    assert_eq!(created.name, "Bella");
    assert!(created.is_active);
    assert_eq!(created.currency, "USD");
    assert_eq!(created.categories.len(), 5);

    let by_id = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(by_id.slug, "bella-1");

    let by_slug = repo.get_by_slug("bella-1").await.unwrap();
    assert_eq!(by_slug.id, created.id);

    let by_email = repo.get_by_email("b@x.com").await.unwrap();
    assert_eq!(by_email.id, created.id);
}

#[tokio::test]
async fn stored_password_is_hashed() {
    let repo = SurrealRestaurantRepository::new(setup().await);
    repo.create(bella()).await.unwrap();

    let account = repo.get_account_by_email("b@x.com").await.unwrap();
    assert_ne!(account.password_hash, "pw123456");
    assert!(account.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let repo = SurrealRestaurantRepository::new(setup().await);
    repo.create(bella()).await.unwrap();

    let err = repo
        .create(CreateRestaurant {
            slug: "bella-2".into(),
            ..bella()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, MenuError::Conflict { .. }), "got {err:?}");
}

#[tokio::test]
async fn duplicate_slug_is_a_conflict() {
    let repo = SurrealRestaurantRepository::new(setup().await);
    repo.create(bella()).await.unwrap();

    let err = repo
        .create(CreateRestaurant {
            email: "other@x.com".into(),
            ..bella()
        })
        .await
        .unwrap_err();
    match err {
        MenuError::Conflict { message } => assert_eq!(message, "Restaurant slug already exists"),
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let repo = SurrealRestaurantRepository::new(setup().await);
    let err = repo.get_by_slug("nobody").await.unwrap_err();
    assert!(matches!(err, MenuError::NotFound { .. }));
}

#[tokio::test]
async fn update_overwrites_supplied_fields_only() {
    let repo = SurrealRestaurantRepository::new(setup().await);
    let created = repo.create(bella()).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateRestaurant {
                phone: Some(Some("555-0100".into())),
                currency: Some("EUR".into()),
                categories: Some(vec!["Pizza".into(), "Drinks".into()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Bella");
    assert_eq!(updated.phone.as_deref(), Some("555-0100"));
    assert_eq!(updated.currency, "EUR");
    assert_eq!(updated.categories, ["Pizza", "Drinks"]);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_can_clear_optional_fields() {
    let repo = SurrealRestaurantRepository::new(setup().await);
    let created = repo.create(bella()).await.unwrap();

    repo.update(
        created.id,
        UpdateRestaurant {
            phone: Some(Some("555-0100".into())),
            logo: Some(Some("https://img.example/logo.png".into())),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let cleared = repo
        .update(
            created.id,
            UpdateRestaurant {
                logo: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(cleared.logo, None);
    assert_eq!(cleared.phone.as_deref(), Some("555-0100"));
}

#[tokio::test]
async fn empty_category_list_is_kept() {
    let repo = SurrealRestaurantRepository::new(setup().await);
    let created = repo.create(bella()).await.unwrap();
    assert_eq!(created.categories.len(), 5);

    let updated = repo
        .update(
            created.id,
            UpdateRestaurant {
                categories: Some(Vec::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.categories.is_empty());

    let reread = repo.get_by_id(created.id).await.unwrap();
    assert!(reread.categories.is_empty());
}

#[tokio::test]
async fn update_password_replaces_hash() {
    let repo = SurrealRestaurantRepository::new(setup().await);
    let created = repo.create(bella()).await.unwrap();
    let before = repo.get_account_by_slug("bella-1").await.unwrap();

    repo.update(
        created.id,
        UpdateRestaurant {
            password: Some("new-secret".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let after = repo.get_account_by_slug("bella-1").await.unwrap();
    assert_ne!(before.password_hash, after.password_hash);
}

#[tokio::test]
async fn toggle_twice_restores_status() {
    let repo = SurrealRestaurantRepository::new(setup().await);
    let created = repo.create(bella()).await.unwrap();

    let off = repo.toggle_active(created.id).await.unwrap();
    assert!(!off.is_active);
    let on = repo.toggle_active(created.id).await.unwrap();
    assert!(on.is_active);
}

#[tokio::test]
async fn set_active_on_unknown_id_is_not_found() {
    let repo = SurrealRestaurantRepository::new(setup().await);
    let err = repo
        .set_active(uuid::Uuid::new_v4(), false)
        .await
        .unwrap_err();
    assert!(matches!(err, MenuError::NotFound { .. }));
}

#[tokio::test]
async fn listing_is_newest_first_with_item_counts() {
    let db = setup().await;
    let repo = SurrealRestaurantRepository::new(db.clone());
    let items = SurrealMenuItemRepository::new(db);

    let first = repo.create(bella()).await.unwrap();
    let second = repo
        .create(CreateRestaurant {
            name: "Luigi".into(),
            email: "l@x.com".into(),
            slug: "luigi-1".into(),
            password: "pw123456".into(),
        })
        .await
        .unwrap();

    for name in ["Pizza", "Pasta"] {
        items
            .create(CreateMenuItem {
                restaurant_id: first.id,
                name: name.into(),
                description: String::new(),
                price: 10.0,
                category: "Main Course".into(),
                image: None,
            })
            .await
            .unwrap();
    }

    let listed = repo.list_with_item_counts().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].restaurant.id, second.id);
    assert_eq!(listed[0].menu_item_count, 0);
    assert_eq!(listed[1].restaurant.id, first.id);
    assert_eq!(listed[1].menu_item_count, 2);
}
