//! Browsers request `/favicon.ico` on every page load. Answer with an empty
//! 200 so those requests do not show up as 404s in the request log.

use axum::http::StatusCode;
use axum::{routing::get, Router};

use crate::state::AppState;

async fn favicon() -> StatusCode {
    StatusCode::OK
}

pub fn router() -> Router<AppState> {
    Router::new().route("/favicon.ico", get(favicon))
}
