//! Handlers for the `/cars` resource.
//!
//! Each handler validates its input completely before making exactly one
//! store call.

use axum::extract::{Path, State};
use axum::Json;
use cars_core::error::CoreError;
use cars_core::types::DbId;
use cars_db::models::car::{CarView, CreateCar, UpdateCar};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::{CarListResponse, CarResponse, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Car", id })
}

/// POST /cars
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<MessageResponse>> {
    let input = CreateCar::from_json(&body)?;
    tracing::debug!(?input, "Creating car");

    let car = state.store.insert(&input).await?;
    tracing::info!(car_id = car.id, name = %car.name, "Car created");

    Ok(Json(MessageResponse::new(format!(
        "car {} has been created successfully.",
        car.name
    ))))
}

/// GET /cars
///
/// List entries carry no `id`; see [`CarView`].
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CarListResponse>> {
    let cars: Vec<CarView> = state
        .store
        .list()
        .await?
        .into_iter()
        .map(CarView::from)
        .collect();

    Ok(Json(CarListResponse {
        count: cars.len(),
        cars,
    }))
}

/// GET /cars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CarResponse>> {
    let car = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(CarResponse {
        message: "success",
        car: car.into(),
    }))
}

/// PUT /cars/{id}
///
/// Overwrites name, model, doors and color. `horsepower` keeps the value it
/// was created with, whatever the body says.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<MessageResponse>> {
    let input = UpdateCar::from_json(&body)?;

    let car = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(car_id = car.id, name = %car.name, "Car updated");

    Ok(Json(MessageResponse::new(format!(
        "car {} successfully updated",
        car.name
    ))))
}

/// DELETE /cars/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let car = state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(car_id = car.id, name = %car.name, "Car deleted");

    Ok(Json(MessageResponse::new(format!(
        "Car {} successfully deleted.",
        car.name
    ))))
}
