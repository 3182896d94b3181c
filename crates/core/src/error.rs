use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Handlers translate store outcomes into these variants; the HTTP layer
/// maps them onto status codes and client-facing messages.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
