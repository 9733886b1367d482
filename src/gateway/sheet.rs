//! HTTP client for the spreadsheet-backed tabular store.
//!
//! The store exposes one endpoint. Reads are `GET ?sheet=<table>&...` with
//! free-form filter parameters; writes are `POST ?sheet=<table>` with a body
//! of `{ "data": { <column>: <value>, ... } }`.

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{read_json, GatewayError};
use crate::models::*;

pub const THOUGHT_TABLE: &str = "Zill_Mind";
pub const TASK_TABLE: &str = "Zill_Action";
pub const INCOME_TABLE: &str = "Zill_Money";

/// The reads the dashboard performs, each with a fixed table and filter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetQuery {
    /// Thoughts logged today.
    TodayThoughts,
    /// High-priority completed tasks, capped at `limit`.
    TopTasks { limit: u32 },
    /// Income summed over the current week.
    WeeklyIncome,
}

impl SheetQuery {
    pub fn table(&self) -> &'static str {
        match self {
            Self::TodayThoughts => THOUGHT_TABLE,
            Self::TopTasks { .. } => TASK_TABLE,
            Self::WeeklyIncome => INCOME_TABLE,
        }
    }

    /// Filter parameters sent alongside `sheet`.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::TodayThoughts => vec![("filter", "today".to_string())],
            Self::TopTasks { limit } => vec![
                ("priority", TOP_TASK_PRIORITY.to_string()),
                ("status", TOP_TASK_STATUS.to_string()),
                ("limit", limit.to_string()),
            ],
            Self::WeeklyIncome => vec![("filter", "weekSum".to_string())],
        }
    }
}

#[derive(Debug, Clone)]
pub struct SheetClient {
    base_url: String,
    client: Client,
}

impl SheetClient {
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Read a table. Parameters are forwarded untouched and the decoded body
    /// is returned as-is.
    pub async fn read_table(
        &self,
        table: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, GatewayError> {
        tracing::debug!(table, ?params, "reading table");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("sheet", table)])
            .query(params)
            .send()
            .await?;
        read_json(response).await
    }

    /// Append one record. Repeating the call stores a duplicate row.
    pub async fn append_record(
        &self,
        table: &str,
        fields: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<serde_json::Value, GatewayError> {
        tracing::debug!(table, "appending record");
        let response = self
            .client
            .post(&self.base_url)
            .query(&[("sheet", table)])
            .json(&serde_json::json!({ "data": fields }))
            .send()
            .await?;
        read_json(response).await
    }

    /// Run one of the typed reads and decode the result.
    pub async fn query<T: DeserializeOwned>(&self, query: SheetQuery) -> Result<T, GatewayError> {
        let body = self.read_table(query.table(), &query.params()).await?;
        serde_json::from_value(body).map_err(GatewayError::decode)
    }

    // ============================================================
    // Typed reads
    // ============================================================

    pub async fn get_today_thoughts(&self) -> Result<Vec<Thought>, GatewayError> {
        self.query(SheetQuery::TodayThoughts).await
    }

    pub async fn get_top_tasks(&self, limit: u32) -> Result<Vec<Task>, GatewayError> {
        self.query(SheetQuery::TopTasks { limit }).await
    }

    pub async fn get_weekly_income(&self) -> Result<Income, GatewayError> {
        self.query(SheetQuery::WeeklyIncome).await
    }

    // ============================================================
    // Writes
    // ============================================================

    pub async fn append_thought(
        &self,
        thought: &NewThought,
    ) -> Result<serde_json::Value, GatewayError> {
        let fields = match serde_json::to_value(thought).map_err(GatewayError::decode)? {
            serde_json::Value::Object(fields) => fields,
            other => {
                return Err(GatewayError::Decode(format!(
                    "thought did not serialize to an object: {other}"
                )))
            }
        };
        self.append_record(THOUGHT_TABLE, &fields).await
    }
}
