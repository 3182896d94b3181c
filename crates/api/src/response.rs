//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` response body.
///
/// Used by the informational endpoints and by delete confirmations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
