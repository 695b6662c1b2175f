//! Response bodies for the `/cars` resource.
//!
//! These shapes are the public contract; field names must not change.

use cars_db::models::car::CarView;
use serde::Serialize;

/// `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "count": N, "cars": [...] }`
#[derive(Debug, Serialize)]
pub struct CarListResponse {
    pub count: usize,
    pub cars: Vec<CarView>,
}

/// `{ "message": "success", "car": {...} }`
#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub message: &'static str,
    pub car: CarView,
}
