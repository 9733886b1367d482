//! View controller: session state, the operations that change it, and the
//! rendered page.

mod controller;
mod render;
mod state;

pub use controller::*;
pub use render::render_dashboard;
pub use state::DashboardState;
