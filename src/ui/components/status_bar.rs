//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::STATUS_HINT;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let (status_text, status_color) = if let Some(error) = &app.error_message {
            (format!("{error} (Esc to dismiss)"), Color::Red)
        } else if !app.warnings.is_empty() {
            (
                format!("⚠ {} record warning(s) • {}", app.warnings.len(), STATUS_HINT),
                Color::Yellow,
            )
        } else {
            (STATUS_HINT.to_string(), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
