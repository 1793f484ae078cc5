//! Dashboard summary cards

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::constants::{CARD_EVENTS, CARD_IN_PROGRESS, CARD_OVERDUE, CARD_TASKS};

/// One card: title, headline number and a detail line
struct Card {
    title: &'static str,
    value: usize,
    detail: String,
    accent: Color,
}

/// Row of summary cards at the top of the dashboard
pub struct SummaryCards;

impl SummaryCards {
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let summary = app.summary();

        let overdue_accent = if summary.overdue > 0 { Color::Red } else { Color::Green };
        let cards = [
            Card {
                title: CARD_TASKS,
                value: summary.total_tasks,
                detail: format!("{}% completed", summary.completion_percent()),
                accent: Color::Cyan,
            },
            Card {
                title: CARD_IN_PROGRESS,
                value: summary.in_progress,
                detail: format!("{} open", summary.open),
                accent: Color::Yellow,
            },
            Card {
                title: CARD_OVERDUE,
                value: summary.overdue,
                detail: format!("{} due today", summary.due_today),
                accent: overdue_accent,
            },
            Card {
                title: CARD_EVENTS,
                value: summary.upcoming_events,
                detail: format!("{} total", summary.total_events),
                accent: Color::Magenta,
            },
        ];

        let slots = LayoutManager::columns(area, cards.len());
        for (card, slot) in cards.iter().zip(slots) {
            Self::render_card(f, slot, card);
        }
    }

    fn render_card(f: &mut Frame, area: Rect, card: &Card) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    card.value.to_string(),
                    Style::default().fg(card.accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(card.title, Style::default().fg(Color::White)),
            ]),
            Line::from(Span::styled(card.detail.clone(), Style::default().fg(Color::DarkGray))),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(card.accent));

        f.render_widget(Paragraph::new(lines).block(block).alignment(Alignment::Center), area);
    }
}
