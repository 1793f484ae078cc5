//! UI module for Taskboard
//!
//! Dashboard and board views over a snapshot, rendered with ratatui.

pub mod app;
pub mod components;
pub mod events;
pub mod layout;
pub mod renderer;

pub use app::{App, View};
pub use events::handle_events;
pub use layout::LayoutManager;
pub use renderer::{render_ui, run_app};
