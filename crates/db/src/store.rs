//! The row store capability used by the HTTP layer.

use async_trait::async_trait;
use cars_core::types::DbId;

use crate::models::car::{Car, CreateCar, UpdateCar};

/// Durable storage for cars.
///
/// Every method is a single store call; implementations must not leave a
/// partially written row behind when they return an error.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Insert a new car and return it with its assigned `id`.
    async fn insert(&self, input: &CreateCar) -> Result<Car, sqlx::Error>;

    /// All cars in ascending `id` order.
    async fn list(&self) -> Result<Vec<Car>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Car>, sqlx::Error>;

    /// Overwrite the mutable fields of a car. Returns `None` if no row matched.
    async fn update(&self, id: DbId, input: &UpdateCar) -> Result<Option<Car>, sqlx::Error>;

    /// Permanently remove a car, returning the removed row if one matched.
    async fn delete(&self, id: DbId) -> Result<Option<Car>, sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
