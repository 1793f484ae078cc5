//! Utility modules for Taskboard.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Timestamp parsing, calendar-day arithmetic and relative date text
//! - [`color`] - Terminal colors for tags and named palette entries

pub mod color;
pub mod datetime;
