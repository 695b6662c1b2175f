//! In-process [`CarStore`] used by tests and database-less runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cars_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::car::{Car, CreateCar, UpdateCar};
use crate::store::CarStore;

/// Cars held in a map keyed by id. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryCarStore {
    inner: RwLock<Rows>,
}

#[derive(Debug, Default)]
struct Rows {
    last_id: DbId,
    cars: BTreeMap<DbId, Car>,
}

impl InMemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.cars.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CarStore for InMemoryCarStore {
    async fn insert(&self, input: &CreateCar) -> Result<Car, sqlx::Error> {
        let mut rows = self.inner.write().await;
        rows.last_id += 1;
        let car = Car {
            id: rows.last_id,
            name: input.name.clone(),
            model: input.model.clone(),
            doors: input.doors,
            color: input.color.clone(),
            horsepower: input.horsepower.clone(),
        };
        rows.cars.insert(car.id, car.clone());
        Ok(car)
    }

    async fn list(&self) -> Result<Vec<Car>, sqlx::Error> {
        Ok(self.inner.read().await.cars.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        Ok(self.inner.read().await.cars.get(&id).cloned())
    }

    async fn update(&self, id: DbId, input: &UpdateCar) -> Result<Option<Car>, sqlx::Error> {
        let mut rows = self.inner.write().await;
        Ok(rows.cars.get_mut(&id).map(|car| {
            car.name = input.name.clone();
            car.model = input.model.clone();
            car.doors = input.doors;
            car.color = input.color.clone();
            car.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        Ok(self.inner.write().await.cars.remove(&id))
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
