//! Upcoming deadlines widget

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::super::app::App;
use super::badge::{create_priority_badge, create_urgency_badge};
use crate::constants::{EMPTY_UPCOMING_DEADLINES, HEADER_UPCOMING_DEADLINES};
use crate::entities::Task;
use crate::triage::urgency_bucket;

/// Overdue and upcoming tasks, most pressing first
pub struct DeadlinesList;

impl DeadlinesList {
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(HEADER_UPCOMING_DEADLINES)
            .title_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan));

        let tasks = app.upcoming_deadlines();
        if tasks.is_empty() {
            let empty = Paragraph::new(EMPTY_UPCOMING_DEADLINES)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = tasks.into_iter().map(|task| Self::task_item(task, app)).collect();
        f.render_widget(List::new(items).block(block), area);
    }

    fn task_item(task: &Task, app: &App) -> ListItem<'static> {
        let mut spans = Vec::new();

        if let Some(deadline) = task.deadline {
            spans.push(create_urgency_badge(urgency_bucket(deadline, app.now)));
            spans.push(Span::raw(" "));
        }

        if let Some(flag) = create_priority_badge(task.priority) {
            spans.push(flag);
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled(task.description.clone(), Style::default().fg(Color::White)));

        if app.config.display.show_assignees {
            if let Some(user) = &task.assigned_user {
                spans.push(Span::styled(format!(" @{user}"), Style::default().fg(Color::Gray)));
            }
        }

        ListItem::new(Line::from(spans))
    }
}
