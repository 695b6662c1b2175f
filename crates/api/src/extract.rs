//! Request body extractor that reports non-JSON payloads as domain errors.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use cars_core::error::CoreError;
use cars_core::payload::NOT_JSON_MESSAGE;
use serde_json::Value;

use crate::error::AppError;

/// The request body decoded as untyped JSON.
///
/// A missing `application/json` content type or an unparseable body is
/// rejected with [`CoreError::MalformedBody`] rather than axum's plain-text
/// rejection, so clients always receive the `{ "error", "code" }` shape.
/// Any other rejection, such as a body over the size limit, keeps the status
/// axum assigns to it. Field presence is checked later against the decoded
/// value.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(
                rejection @ (JsonRejection::MissingJsonContentType(_)
                | JsonRejection::JsonSyntaxError(_)
                | JsonRejection::JsonDataError(_)),
            ) => {
                tracing::debug!(reason = %rejection.body_text(), "Request body is not JSON");
                Err(AppError::Core(CoreError::MalformedBody(
                    NOT_JSON_MESSAGE.to_string(),
                )))
            }
            Err(rejection) => Err(AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            }),
        }
    }
}
