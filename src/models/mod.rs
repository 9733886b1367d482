//! Domain models for the Zill dashboard.
//!
//! # Core Concepts
//!
//! Everything here is owned by the remote tabular store; the dashboard only
//! holds read-only copies for the current session.
//!
//! - [`Thought`]: A logged goal, note, or assistant reply (`Zill_Mind` table).
//!   New rows are written as [`NewThought`].
//! - [`Task`]: A completed high-priority task (`Zill_Action` table).
//! - [`Income`]: The weekly income aggregate (`Zill_Money` table).
//!
//! None of these carry an identity. Appending the same thought twice stores
//! two rows.

mod cell;
mod income;
mod task;
mod thought;

pub use income::*;
pub use task::*;
pub use thought::*;
