use std::sync::Arc;

use cars_db::store::CarStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Row store for the `cars` table.
    pub store: Arc<dyn CarStore>,
}

impl AppState {
    pub fn new(store: impl CarStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
