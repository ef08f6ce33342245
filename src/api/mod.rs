mod handlers;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use handlers::{generate, generate_completion, index, not_found};
pub use models::{ApiError, GenerateRequest, GenerateResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/generate", post(generate))
        .fallback(not_found)
        .with_state(state)
}
