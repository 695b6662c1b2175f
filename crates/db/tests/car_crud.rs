//! Integration tests for car CRUD against PostgreSQL.
//!
//! Exercises both the `CarRepo` functions and the `PgCarStore` trait object
//! the HTTP layer receives.

use std::sync::Arc;

use cars_db::models::car::{CreateCar, UpdateCar};
use cars_db::repositories::{CarRepo, PgCarStore};
use cars_db::store::CarStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_car(name: &str) -> CreateCar {
    CreateCar {
        name: name.to_string(),
        model: "GT".to_string(),
        doors: 2,
        color: "red".to_string(),
        horsepower: "450".to_string(),
    }
}

fn repaint(name: &str, color: &str) -> UpdateCar {
    UpdateCar {
        name: name.to_string(),
        model: "GT500".to_string(),
        doors: 2,
        color: color.to_string(),
    }
}

// ---------------------------------------------------------------------------
// CarRepo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_find_round_trips_fields(pool: PgPool) {
    let created = CarRepo::create(&pool, &new_car("Mustang")).await.unwrap();
    assert!(created.id > 0);

    let found = CarRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("car should exist");
    assert_eq!(found, created);
    assert_eq!(found.horsepower, "450");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_rows_in_id_order(pool: PgPool) {
    for name in ["Mustang", "Camaro", "Charger"] {
        CarRepo::create(&pool, &new_car(name)).await.unwrap();
    }

    let cars = CarRepo::list(&pool).await.unwrap();
    let names: Vec<_> = cars.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Mustang", "Camaro", "Charger"]);
    assert!(cars.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_overwrites_four_fields_and_keeps_horsepower(pool: PgPool) {
    let created = CarRepo::create(&pool, &new_car("Mustang")).await.unwrap();

    let updated = CarRepo::update(&pool, created.id, &repaint("Shelby", "blue"))
        .await
        .unwrap()
        .expect("car should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Shelby");
    assert_eq!(updated.model, "GT500");
    assert_eq!(updated.color, "blue");
    assert_eq!(updated.horsepower, "450");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_row_returns_none(pool: PgPool) {
    let result = CarRepo::update(&pool, 999_999, &repaint("Ghost", "white"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_removed_row_once(pool: PgPool) {
    let created = CarRepo::create(&pool, &new_car("Mustang")).await.unwrap();

    let removed = CarRepo::delete(&pool, created.id).await.unwrap();
    assert_eq!(removed.map(|c| c.name), Some("Mustang".to_string()));

    assert!(CarRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(CarRepo::delete(&pool, created.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// PgCarStore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn pg_store_behind_trait_object(pool: PgPool) {
    let store: Arc<dyn CarStore> = Arc::new(PgCarStore::new(pool));

    store.ping().await.unwrap();

    let car = store.insert(&new_car("Mustang")).await.unwrap();
    assert_eq!(store.list().await.unwrap().len(), 1);

    store.delete(car.id).await.unwrap();
    assert!(store.list().await.unwrap().is_empty());
}
