use serde::Serialize;

use crate::models::{Income, Task, Thought};

/// Everything the dashboard shows for the current session.
///
/// Fields are private; each one changes only through its own transition so
/// an operation touching one feed can never disturb another.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardState {
    thoughts: Vec<Thought>,
    tasks: Vec<Task>,
    income: Income,
    thought_input: String,
    assistant_input: String,
    assistant_reply: Option<String>,
}

impl DashboardState {
    pub fn thoughts(&self) -> &[Thought] {
        &self.thoughts
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn income(&self) -> Income {
        self.income
    }

    pub fn thought_input(&self) -> &str {
        &self.thought_input
    }

    pub fn assistant_input(&self) -> &str {
        &self.assistant_input
    }

    pub fn assistant_reply(&self) -> Option<&str> {
        self.assistant_reply.as_deref()
    }

    // ============================================================
    // Transitions
    // ============================================================

    pub fn replace_thoughts(&mut self, thoughts: Vec<Thought>) {
        self.thoughts = thoughts;
    }

    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn replace_income(&mut self, income: Income) {
        self.income = income;
    }

    pub fn set_thought_input(&mut self, text: impl Into<String>) {
        self.thought_input = text.into();
    }

    pub fn clear_thought_input(&mut self) {
        self.thought_input.clear();
    }

    pub fn set_assistant_input(&mut self, prompt: impl Into<String>) {
        self.assistant_input = prompt.into();
    }

    pub fn set_assistant_reply(&mut self, reply: impl Into<String>) {
        self.assistant_reply = Some(reply.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = DashboardState::default();
        assert!(state.thoughts().is_empty());
        assert!(state.tasks().is_empty());
        assert_eq!(state.income().total, 0.0);
        assert!(state.assistant_reply().is_none());
    }

    #[test]
    fn replacing_thoughts_discards_previous_rows() {
        let mut state = DashboardState::default();
        state.replace_thoughts(vec![Thought {
            text: "old".to_string(),
            ..Default::default()
        }]);
        state.replace_thoughts(vec![Thought {
            text: "new".to_string(),
            ..Default::default()
        }]);

        assert_eq!(state.thoughts().len(), 1);
        assert_eq!(state.thoughts()[0].text, "new");
    }

    #[test]
    fn clearing_thought_input_leaves_assistant_input() {
        let mut state = DashboardState::default();
        state.set_thought_input("goal");
        state.set_assistant_input("plan tomorrow");

        state.clear_thought_input();

        assert_eq!(state.thought_input(), "");
        assert_eq!(state.assistant_input(), "plan tomorrow");
    }
}
