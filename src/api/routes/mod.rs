//! API routes module

pub mod zoom;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Zoom meeting routes
        .nest("/zoom", zoom::router())
}
