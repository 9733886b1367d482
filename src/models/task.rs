use serde::{Deserialize, Serialize};

use super::cell::deserialize_cell_text;

/// A row of the action table. Filtering by priority and status happens in
/// the store, so this side only ever reads the two display columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "Task", default, deserialize_with = "deserialize_cell_text")]
    pub description: String,
    #[serde(rename = "Status", default, deserialize_with = "deserialize_cell_text")]
    pub status: String,
}

/// Priority requested for the top-task feed.
pub const TOP_TASK_PRIORITY: &str = "High";
/// Status requested for the top-task feed.
pub const TOP_TASK_STATUS: &str = "Done";
/// How many tasks the dashboard shows.
pub const TOP_TASK_LIMIT: u32 = 3;
