//! Reusable UI components

pub mod badge;

pub mod board;
pub mod deadlines_list;
pub mod recent_events;
pub mod status_bar;
pub mod summary_cards;

// Component exports
pub use board::BoardView;
pub use deadlines_list::DeadlinesList;
pub use recent_events::RecentEventsList;
pub use status_bar::StatusBar;
pub use summary_cards::SummaryCards;
