//! Informational endpoints.
//!
//! These touch neither validation nor the store; they exist as liveness
//! and info probes.

use axum::{routing::get, Json, Router};

use crate::response::MessageResponse;
use crate::state::AppState;

/// GET / -- greeting probe.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse { message: "Hello" })
}

/// GET /about -- static service description.
async fn about() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "This is the about page.",
    })
}

/// Mount the informational routes at the application root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/about", get(about))
}
