use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use super::DashboardState;
use crate::gateway::{Gateway, GatewayError};
use crate::models::*;

/// One of the three independently loaded data feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feed {
    Thoughts,
    Tasks,
    Income,
}

impl Feed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Thoughts => "thoughts",
            Self::Tasks => "tasks",
            Self::Income => "income",
        }
    }
}

/// Result of a best-effort write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub persisted: bool,
}

/// Reply from the assistant and whether logging it to the store worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantOutcome {
    pub reply: String,
    pub persisted: bool,
}

/// Drives the dashboard: owns the session state and sequences gateway calls.
///
/// The state lock is only taken after a gateway call has finished, never
/// across an await.
#[derive(Debug, Clone)]
pub struct DashboardController {
    gateway: Gateway,
    state: Arc<Mutex<DashboardState>>,
}

impl DashboardController {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            state: Arc::new(Mutex::new(DashboardState::default())),
        }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().expect("session state lock poisoned").clone()
    }

    fn update(&self, f: impl FnOnce(&mut DashboardState)) {
        let mut state = self.state.lock().expect("session state lock poisoned");
        f(&mut state);
    }

    // ============================================================
    // Reads
    // ============================================================

    /// Replace the thought list. On failure the previous list stays.
    pub async fn load_thoughts(&self) -> Result<(), GatewayError> {
        let thoughts = self.gateway.sheets.get_today_thoughts().await?;
        tracing::debug!(count = thoughts.len(), "loaded thoughts");
        self.update(|s| s.replace_thoughts(thoughts));
        Ok(())
    }

    pub async fn load_tasks(&self) -> Result<(), GatewayError> {
        let tasks = self.gateway.sheets.get_top_tasks(TOP_TASK_LIMIT).await?;
        tracing::debug!(count = tasks.len(), "loaded tasks");
        self.update(|s| s.replace_tasks(tasks));
        Ok(())
    }

    pub async fn load_income(&self) -> Result<(), GatewayError> {
        let income = self.gateway.sheets.get_weekly_income().await?;
        tracing::debug!(total = income.total, "loaded income");
        self.update(|s| s.replace_income(income));
        Ok(())
    }

    /// Fire all three reads at once. Each feed lands on its own; the ones
    /// that failed are returned and keep their stale data.
    pub async fn load_all(&self) -> Vec<(Feed, GatewayError)> {
        let (thoughts, tasks, income) =
            tokio::join!(self.load_thoughts(), self.load_tasks(), self.load_income());

        [
            (Feed::Thoughts, thoughts),
            (Feed::Tasks, tasks),
            (Feed::Income, income),
        ]
        .into_iter()
        .filter_map(|(feed, result)| result.err().map(|e| (feed, e)))
        .inspect(|(feed, e)| tracing::warn!(feed = feed.as_str(), "Failed to load feed: {}", e))
        .collect()
    }

    /// Reload thoughts after a write. Failure keeps the stale list.
    async fn refresh_thoughts(&self) {
        if let Err(e) = self.load_thoughts().await {
            tracing::warn!("Failed to refresh thoughts: {}", e);
        }
    }

    // ============================================================
    // Writes
    // ============================================================

    /// Append a goal, then clear the input and reload thoughts whether or
    /// not the append went through.
    pub async fn submit_thought(&self, text: &str) -> WriteOutcome {
        self.update(|s| s.set_thought_input(text));

        let thought = NewThought::goal(text, today());
        let persisted = match self.gateway.sheets.append_thought(&thought).await {
            Ok(ack) => {
                tracing::info!(?ack, "Saved thought");
                true
            }
            Err(e) => {
                tracing::error!("Failed to save thought: {}", e);
                false
            }
        };

        self.update(|s| s.clear_thought_input());
        self.refresh_thoughts().await;

        WriteOutcome { persisted }
    }

    /// Ask the assistant, show the reply, and log it as an `AI Response`
    /// thought. A failed log is reported in the outcome; the reply stays
    /// visible and the thought list is still reloaded once.
    pub async fn ask_assistant(&self, prompt: &str) -> Result<AssistantOutcome, GatewayError> {
        let reply = self.gateway.ask(prompt).await?;
        self.update(|s| {
            s.set_assistant_input(prompt);
            s.set_assistant_reply(reply.clone());
        });

        let thought = NewThought::ai_response(reply.clone(), prompt, today());
        let persisted = match self.gateway.sheets.append_thought(&thought).await {
            Ok(ack) => {
                tracing::info!(?ack, "Saved assistant reply");
                true
            }
            Err(e) => {
                tracing::error!("Failed to save assistant reply: {}", e);
                false
            }
        };

        self.refresh_thoughts().await;

        Ok(AssistantOutcome { reply, persisted })
    }
}

/// Calendar day stamped on new thoughts (UTC).
fn today() -> NaiveDate {
    Utc::now().date_naive()
}
