//! Car entity model and DTOs.

use cars_core::error::CoreError;
use cars_core::payload;
use cars_core::types::DbId;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

/// A car row from the `cars` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Car {
    pub id: DbId,
    pub name: String,
    pub model: String,
    pub doors: i32,
    pub color: String,
    pub horsepower: String,
}

/// Public representation of a car in response bodies.
///
/// Carries no `id`. Existing clients of the list and read endpoints expect
/// exactly these five keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarView {
    pub name: String,
    pub model: String,
    pub doors: i32,
    pub color: String,
    pub horsepower: String,
}

impl From<Car> for CarView {
    fn from(car: Car) -> Self {
        Self {
            name: car.name,
            model: car.model,
            doors: car.doors,
            color: car.color,
            horsepower: car.horsepower,
        }
    }
}

/// DTO for creating a new car. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCar {
    pub name: String,
    pub model: String,
    pub doors: i32,
    pub color: String,
    pub horsepower: String,
}

impl CreateCar {
    /// Build from a decoded request body, reporting the first absent field.
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let obj = payload::as_object(body)?;
        Ok(Self {
            name: payload::require_text(obj, "name")?,
            model: payload::require_text(obj, "model")?,
            doors: payload::require_i32(obj, "doors")?,
            color: payload::require_text(obj, "color")?,
            horsepower: payload::require_text(obj, "horsepower")?,
        })
    }
}

/// DTO for overwriting an existing car.
///
/// Has no `horsepower`: an update never touches it, even when the request
/// body carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCar {
    pub name: String,
    pub model: String,
    pub doors: i32,
    pub color: String,
}

impl UpdateCar {
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let obj = payload::as_object(body)?;
        Ok(Self {
            name: payload::require_text(obj, "name")?,
            model: payload::require_text(obj, "model")?,
            doors: payload::require_i32(obj, "doors")?,
            color: payload::require_text(obj, "color")?,
        })
    }
}
