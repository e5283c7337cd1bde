pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload-resume-file", post(handlers::handle_upload_file))
        .route("/upload-resume-text", post(handlers::handle_upload_text))
        .route("/analysis", get(handlers::handle_analysis))
        .route("/ats-score", post(handlers::handle_ats_score))
        .with_state(state)
}
