use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::gateway::GatewayError;
use crate::view::{
    render_dashboard, AssistantOutcome, DashboardController, DashboardState, Feed, WriteOutcome,
};

// ============================================================
// Error Handling
// ============================================================

/// Log a gateway error and return a sanitized response to the client.
/// Upstream bodies can echo request details, so clients only see a generic
/// message; the full error goes to the server log.
fn gateway_error(e: GatewayError) -> (StatusCode, String) {
    match e {
        GatewayError::MissingCredential => {
            tracing::warn!("Assistant requested without a completion API key");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Assistant is not configured".to_string(),
            )
        }
        e => {
            tracing::error!("Upstream error: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                "Upstream request failed".to_string(),
            )
        }
    }
}

// ============================================================
// Inputs
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitThoughtInput {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskAssistantInput {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub state: DashboardState,
    pub failed: Vec<Feed>,
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Page
// ============================================================

/// Load all three feeds, then render. Feeds that fail keep their stale data.
pub async fn dashboard_page(State(controller): State<DashboardController>) -> Html<String> {
    controller.load_all().await;
    Html(render_dashboard(&controller.snapshot()))
}

pub async fn submit_thought_form(
    State(controller): State<DashboardController>,
    Form(input): Form<SubmitThoughtInput>,
) -> Redirect {
    controller.submit_thought(&input.text).await;
    Redirect::to("/")
}

pub async fn ask_assistant_form(
    State(controller): State<DashboardController>,
    Form(input): Form<AskAssistantInput>,
) -> Result<Redirect, (StatusCode, String)> {
    controller
        .ask_assistant(&input.prompt)
        .await
        .map_err(gateway_error)?;
    Ok(Redirect::to("/"))
}

// ============================================================
// JSON API
// ============================================================

pub async fn get_dashboard(State(controller): State<DashboardController>) -> Json<DashboardState> {
    Json(controller.snapshot())
}

pub async fn refresh(State(controller): State<DashboardController>) -> Json<RefreshResponse> {
    let failed = controller
        .load_all()
        .await
        .into_iter()
        .map(|(feed, _)| feed)
        .collect();
    Json(RefreshResponse {
        state: controller.snapshot(),
        failed,
    })
}

pub async fn submit_thought(
    State(controller): State<DashboardController>,
    Json(input): Json<SubmitThoughtInput>,
) -> Json<WriteOutcome> {
    Json(controller.submit_thought(&input.text).await)
}

pub async fn ask_assistant(
    State(controller): State<DashboardController>,
    Json(input): Json<AskAssistantInput>,
) -> Result<Json<AssistantOutcome>, (StatusCode, String)> {
    controller
        .ask_assistant(&input.prompt)
        .await
        .map(Json)
        .map_err(gateway_error)
}
