use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The request body was not a JSON object.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// A required payload key was absent or `null`.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
