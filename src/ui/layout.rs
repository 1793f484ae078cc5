//! Layout management and calculations

use crate::constants::{BOARD_COLUMN_MIN_WIDTH, SUMMARY_CARD_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (view on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        // Top area: active view (all height except 1 line for status)
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);

        // Bottom area: status bar (1 line height, full width)
        let status_area = Rect::new(area.x, area.y + top_height, area.width, area.height.min(1));

        vec![top_area, status_area]
    }

    /// Split the dashboard into the summary card row and the widget row
    #[must_use]
    pub fn dashboard_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(SUMMARY_CARD_HEIGHT), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Equal-width horizontal slots, used for summary cards and side-by-side widgets
    #[must_use]
    pub fn columns(area: Rect, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
            .split(area)
            .to_vec()
    }

    /// Board columns, one per status, each at least `BOARD_COLUMN_MIN_WIDTH` wide when room allows
    #[must_use]
    pub fn board_columns(area: Rect, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let count_u16 = u16::try_from(count).unwrap_or(u16::MAX);
        if area.width / count_u16 >= BOARD_COLUMN_MIN_WIDTH {
            return Self::columns(area, count);
        }

        // Too narrow: give the first columns their minimum width, the rest collapse
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..count).map(|_| Constraint::Min(BOARD_COLUMN_MIN_WIDTH)))
            .split(area)
            .to_vec()
    }
}
