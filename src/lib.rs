//! Zill: a personal productivity dashboard.
//!
//! Shows today's thoughts, the top completed tasks, and the weekly income
//! from a spreadsheet-backed store, accepts new goals, and relays prompts to
//! a chat-completion API, logging each reply back into the store.

pub mod api;
pub mod config;
pub mod gateway;
pub mod models;
pub mod view;
