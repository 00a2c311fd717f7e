use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tasks/:id/toggle", post(handlers::toggle_form))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/catalog", get(handlers::get_catalog))
        .with_state(state)
}
