mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::view::DashboardController;

pub use handlers::{AskAssistantInput, RefreshResponse, SubmitThoughtInput};

pub fn create_router(controller: DashboardController) -> Router {
    let api = Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/refresh", post(handlers::refresh))
        .route("/thoughts", post(handlers::submit_thought))
        .route("/assistant", post(handlers::ask_assistant))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        // Rendered page and its form actions
        .route("/", get(handlers::dashboard_page))
        .route("/thoughts", post(handlers::submit_thought_form))
        .route("/assistant", post(handlers::ask_assistant_form))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(controller)
}
