//! Fake upstream services for integration tests.
//!
//! One axum server plays both the tabular store (`/exec`) and the chat
//! completion API (`/v1/chat/completions`). It records every request and can
//! be told to fail per sheet.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use zill_dashboard::config::Config;
use zill_dashboard::gateway::Gateway;
use zill_dashboard::view::DashboardController;

pub const TEST_API_KEY: &str = "sk-test-key";

pub struct UpstreamState {
    /// Body served for `Zill_Mind` reads. Successful appends land here too.
    pub thoughts: Value,
    pub tasks: Value,
    pub income: Value,
    /// Query strings of every read, in order.
    pub reads: Vec<HashMap<String, String>>,
    /// `(sheet, data)` of every append attempt, failed ones included.
    pub appends: Vec<(String, Value)>,
    /// Sheets whose reads answer 500.
    pub failing_reads: HashSet<String>,
    /// Sheets whose reads answer 200 with a non-JSON body.
    pub malformed_reads: HashSet<String>,
    pub fail_appends: bool,
    /// Reply content; `None` makes the completion API answer 500.
    pub reply: Option<String>,
    pub empty_choices: bool,
    pub completion_requests: Vec<Value>,
    pub authorization: Vec<String>,
}

impl Default for UpstreamState {
    fn default() -> Self {
        Self {
            thoughts: json!([]),
            tasks: json!([]),
            income: json!({ "total": 0 }),
            reads: Vec::new(),
            appends: Vec::new(),
            failing_reads: HashSet::new(),
            malformed_reads: HashSet::new(),
            fail_appends: false,
            reply: Some("Focus on one client this week.".to_string()),
            empty_choices: false,
            completion_requests: Vec::new(),
            authorization: Vec::new(),
        }
    }
}

#[derive(Clone, Default)]
pub struct Upstream {
    inner: Arc<Mutex<UpstreamState>>,
}

impl Upstream {
    pub fn state(&self) -> MutexGuard<'_, UpstreamState> {
        self.inner.lock().expect("upstream lock poisoned")
    }

    pub fn reads_of(&self, sheet: &str) -> usize {
        self.state()
            .reads
            .iter()
            .filter(|q| q.get("sheet").map(String::as_str) == Some(sheet))
            .count()
    }
}

/// Running fake upstream and a config pointing at it.
pub struct TestEnv {
    pub upstream: Upstream,
    pub config: Config,
}

impl TestEnv {
    pub fn gateway(&self) -> Gateway {
        Gateway::new(&self.config)
    }

    pub fn controller(&self) -> DashboardController {
        DashboardController::new(self.gateway())
    }
}

/// Start the fake upstream on an ephemeral port.
pub async fn spawn_upstream() -> TestEnv {
    let upstream = Upstream::default();
    let app = Router::new()
        .route("/exec", get(read_sheet).post(append_sheet))
        .route("/v1/chat/completions", post(complete_chat))
        .with_state(upstream.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake upstream");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake upstream failed");
    });

    let config = Config::new(format!("http://{}/exec", addr)).with_completion_api(
        format!("http://{}/v1/chat/completions", addr),
        Some(TEST_API_KEY.to_string()),
    );

    TestEnv { upstream, config }
}

async fn read_sheet(
    State(upstream): State<Upstream>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut state = upstream.state();
    state.reads.push(query.clone());

    let sheet = query.get("sheet").cloned().unwrap_or_default();
    if state.failing_reads.contains(&sheet) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "sheet unavailable").into_response();
    }
    if state.malformed_reads.contains(&sheet) {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }

    let body = match sheet.as_str() {
        "Zill_Mind" => state.thoughts.clone(),
        "Zill_Action" => state.tasks.clone(),
        "Zill_Money" => state.income.clone(),
        _ => return (StatusCode::NOT_FOUND, "no such sheet").into_response(),
    };
    Json(body).into_response()
}

async fn append_sheet(
    State(upstream): State<Upstream>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = upstream.state();
    let sheet = query.get("sheet").cloned().unwrap_or_default();
    let data = body.get("data").cloned().unwrap_or(Value::Null);
    state.appends.push((sheet.clone(), data.clone()));

    if state.fail_appends {
        return (StatusCode::INTERNAL_SERVER_ERROR, "append rejected").into_response();
    }

    if sheet == "Zill_Mind" {
        if let Some(rows) = state.thoughts.as_array_mut() {
            rows.push(data);
        }
    }
    Json(json!({ "status": "success" })).into_response()
}

async fn complete_chat(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut state = upstream.state();
    state.completion_requests.push(body);
    if let Some(auth) = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
    {
        state.authorization.push(auth.to_string());
    }

    if state.empty_choices {
        return Json(json!({ "choices": [] })).into_response();
    }
    match &state.reply {
        Some(reply) => Json(json!({
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": reply } }
            ]
        }))
        .into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "model overloaded").into_response(),
    }
}
