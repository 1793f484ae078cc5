//! Constants used throughout the application
//!
//! This module centralizes defaults, UI text, and other constant values
//! to improve maintainability and consistency.

// Triage defaults
/// Upcoming deadlines fall within this many days of now
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 7;
/// Maximum entries in the upcoming-deadlines list
pub const DEFAULT_DEADLINE_LIMIT: usize = 5;
/// Largest accepted upcoming window
pub const MAX_UPCOMING_WINDOW_DAYS: u32 = 365;
/// Largest accepted list length for dashboard widgets
pub const MAX_LIST_LIMIT: usize = 100;

// UI Section Headers
pub const HEADER_SUMMARY: &str = "📊 Overview";
pub const HEADER_RECENT_EVENTS: &str = "📅 Recent events";
pub const HEADER_UPCOMING_DEADLINES: &str = "⏰ Upcoming deadlines";
pub const HEADER_BOARD: &str = "📋 Board";

// Summary card titles
pub const CARD_TASKS: &str = "Tasks";
pub const CARD_IN_PROGRESS: &str = "In progress";
pub const CARD_OVERDUE: &str = "Overdue";
pub const CARD_EVENTS: &str = "Upcoming events";

// Empty states
pub const EMPTY_RECENT_EVENTS: &str = "No events yet";
pub const EMPTY_UPCOMING_DEADLINES: &str = "Nothing due this week";
pub const EMPTY_COLUMN: &str = "No tasks";

// Status bar
pub const STATUS_HINT: &str = "Tab: switch view • 1: dashboard • 2: board • r: reload • q: quit";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_SNAPSHOT_LOADED: &str = "✅ Loaded snapshot";
pub const ERROR_SNAPSHOT_RELOAD_FAILED: &str = "❌ Failed to reload snapshot";

// UI Layout Constants
/// Height of the summary card row, borders included
pub const SUMMARY_CARD_HEIGHT: u16 = 4;
/// Minimum width of one board column
pub const BOARD_COLUMN_MIN_WIDTH: u16 = 20;
