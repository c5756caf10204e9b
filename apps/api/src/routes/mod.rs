pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/extract-skills", post(handlers::handle_extract_skills))
        .route("/api/match-score", post(handlers::handle_match_score))
        .route("/api/recommendations", post(handlers::handle_recommendations))
        .route(
            "/api/skills/categories",
            get(handlers::handle_skill_categories),
        )
        .with_state(state)
}
