pub mod health;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};

use crate::advisor;
use crate::feedback;
use crate::pitch;
use crate::state::AppState;

/// Empty 204 for preflight probes that reach the router.
/// Real browser preflights are answered by the CORS layer before this.
async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/generate-pitch",
            post(pitch::handlers::handle_generate_pitch).options(preflight),
        )
        .route(
            "/ai-advisor",
            post(advisor::handlers::handle_ai_advisor).options(preflight),
        )
        .route(
            "/pitch-feedback",
            post(feedback::handlers::handle_pitch_feedback).options(preflight),
        )
        .with_state(state)
}
