use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cell::{deserialize_cell_bool, deserialize_cell_text};

/// Tag for entries typed into the dashboard by hand.
pub const GOAL_TAG: &str = "Goal";
/// Tag for assistant replies logged back into the store.
pub const AI_RESPONSE_TAG: &str = "AI Response";
/// Context recorded for entries submitted through the dashboard form.
pub const WEB_CONTEXT: &str = "Submitted from web";

/// A row of the thought table as returned by the store.
///
/// The spreadsheet may omit any column or leave a cell blank, so every
/// field falls back to its default; numeric cells are read as text. The
/// date is kept exactly as the store formats it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    #[serde(rename = "Thought", default, deserialize_with = "deserialize_cell_text")]
    pub text: String,
    #[serde(rename = "Tag", default, deserialize_with = "deserialize_cell_text")]
    pub tag: String,
    #[serde(rename = "Context", default, deserialize_with = "deserialize_cell_text")]
    pub context: String,
    #[serde(rename = "Date", default, deserialize_with = "deserialize_cell_text")]
    pub date: String,
    #[serde(
        rename = "Is Today",
        default,
        deserialize_with = "deserialize_cell_bool"
    )]
    pub is_today: bool,
}

impl Thought {
    /// Secondary line shown under the thought text, e.g. `Goal • 2024-05-01`.
    pub fn caption(&self) -> String {
        format!("{} • {}", self.tag, self.date)
    }
}

/// A thought about to be appended to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewThought {
    #[serde(rename = "Thought")]
    pub text: String,
    #[serde(rename = "Tag")]
    pub tag: String,
    #[serde(rename = "Context")]
    pub context: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Is Today")]
    pub is_today: bool,
}

impl NewThought {
    /// A goal typed into the dashboard.
    pub fn goal(text: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            text: text.into(),
            tag: GOAL_TAG.to_string(),
            context: WEB_CONTEXT.to_string(),
            date,
            is_today: true,
        }
    }

    /// An assistant reply, with the prompt that produced it as context.
    pub fn ai_response(reply: impl Into<String>, prompt: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            text: reply.into(),
            tag: AI_RESPONSE_TAG.to_string(),
            context: prompt.into(),
            date,
            is_today: true,
        }
    }
}
