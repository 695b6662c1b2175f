//! Repository for the `cars` table.

use async_trait::async_trait;
use cars_core::types::DbId;
use sqlx::PgPool;

use crate::models::car::{Car, CreateCar, UpdateCar};
use crate::store::CarStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, model, doors, color, horsepower";

/// Provides CRUD operations for cars.
pub struct CarRepo;

impl CarRepo {
    /// Insert a new car, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCar) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (name, model, doors, color, horsepower)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(&input.name)
            .bind(&input.model)
            .bind(input.doors)
            .bind(&input.color)
            .bind(&input.horsepower)
            .fetch_one(pool)
            .await
    }

    /// Find a car by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cars ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars ORDER BY id");
        sqlx::query_as::<_, Car>(&query).fetch_all(pool).await
    }

    /// Overwrite name, model, doors and color. `horsepower` is left as is.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCar,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET
                name = $2,
                model = $3,
                doors = $4,
                color = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.model)
            .bind(input.doors)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a car by ID, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("DELETE FROM cars WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// [`CarStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgCarStore {
    pool: PgPool,
}

impl PgCarStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarStore for PgCarStore {
    async fn insert(&self, input: &CreateCar) -> Result<Car, sqlx::Error> {
        CarRepo::create(&self.pool, input).await
    }

    async fn list(&self) -> Result<Vec<Car>, sqlx::Error> {
        CarRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        CarRepo::find_by_id(&self.pool, id).await
    }

    async fn update(&self, id: DbId, input: &UpdateCar) -> Result<Option<Car>, sqlx::Error> {
        CarRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        CarRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
