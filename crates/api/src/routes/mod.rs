pub mod car;
pub mod favicon;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /cars              list, create
/// /cars/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/cars", car::router())
}
