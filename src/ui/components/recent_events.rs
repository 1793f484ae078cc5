//! Recent events list

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::super::app::App;
use super::badge::{create_event_status_badge, create_tag_badge};
use crate::constants::{EMPTY_RECENT_EVENTS, HEADER_RECENT_EVENTS};
use crate::entities::Event;
use crate::utils::datetime::format_human_datetime;

/// Recent events widget
pub struct RecentEventsList;

impl RecentEventsList {
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(HEADER_RECENT_EVENTS)
            .title_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan));

        let events = app.recent_events();
        if events.is_empty() {
            let empty = Paragraph::new(EMPTY_RECENT_EVENTS)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = events.into_iter().map(|event| Self::event_item(event, app)).collect();
        f.render_widget(List::new(items).block(block), area);
    }

    fn event_item(event: &Event, app: &App) -> ListItem<'static> {
        let mut first_line = vec![
            Span::styled(
                format_human_datetime(event.date, app.now, &app.config.display.time_format),
                Style::default().fg(Color::Rgb(255, 165, 0)),
            ),
            Span::raw(" "),
            Span::styled(event.name.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ];
        if let Some(status) = event.status {
            first_line.push(Span::raw(" "));
            first_line.push(create_event_status_badge(status));
        }

        let mut detail = Vec::new();
        if let Some(location) = &event.location {
            detail.push(Span::styled(format!("  @ {location}"), Style::default().fg(Color::Gray)));
        }
        if app.config.display.show_tags {
            for tag in &event.tags {
                detail.push(Span::raw(" "));
                detail.push(create_tag_badge(tag));
            }
        }

        let mut lines = vec![Line::from(first_line)];
        if !detail.is_empty() {
            lines.push(Line::from(detail));
        }
        ListItem::new(lines)
    }
}
