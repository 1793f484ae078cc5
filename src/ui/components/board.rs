//! Kanban board view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use super::badge::{
    create_paren_badge, create_priority_badge, create_tag_badge, create_urgency_badge, status_color, status_title,
};
use crate::constants::EMPTY_COLUMN;
use crate::entities::Task;
use crate::triage::{urgency_bucket, StatusColumn};

/// One column per configured status, cards in snapshot order
pub struct BoardView;

impl BoardView {
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let partition = app.board();
        let slots = LayoutManager::board_columns(area, partition.columns().len());

        for (column, slot) in partition.columns().iter().zip(slots) {
            Self::render_column(f, slot, column, app);
        }
    }

    fn render_column(f: &mut Frame, area: Rect, column: &StatusColumn<'_, Task>, app: &App) {
        let accent = status_color(column.status);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!("{} ({})", status_title(column.status), column.tasks.len()))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD));

        if column.tasks.is_empty() {
            let empty = Paragraph::new(EMPTY_COLUMN)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = column.tasks.iter().map(|task| Self::card(task, app)).collect();
        f.render_widget(List::new(items).block(block), area);
    }

    /// A card: title line, metadata line, optional tag line, blank spacer
    fn card(task: &Task, app: &App) -> ListItem<'static> {
        let display = &app.config.display;

        let mut title = Vec::new();
        if let Some(flag) = create_priority_badge(task.priority) {
            title.push(flag);
            title.push(Span::raw(" "));
        }
        let title_style = if task.is_completed() {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        title.push(Span::styled(task.description.clone(), title_style));

        let mut meta = Vec::new();
        if let Some(deadline) = task.deadline {
            if task.is_completed() {
                meta.push(Span::styled(
                    deadline.with_timezone(app.now.offset()).format(&display.date_format).to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                meta.push(create_urgency_badge(urgency_bucket(deadline, app.now)));
            }
        }
        if display.show_assignees {
            if let Some(user) = &task.assigned_user {
                if !meta.is_empty() {
                    meta.push(Span::raw(" "));
                }
                meta.push(Span::styled(format!("@{user}"), Style::default().fg(Color::Gray)));
            }
        }
        if display.show_checklist_progress {
            if let Some(progress) = task.checklist_progress() {
                if !meta.is_empty() {
                    meta.push(Span::raw(" "));
                }
                meta.push(create_paren_badge(&format!("{}/{}", progress.done, progress.total)));
            }
        }

        let mut lines = vec![Line::from(title)];
        if !meta.is_empty() {
            lines.push(Line::from(meta));
        }
        if display.show_tags && !task.tags.is_empty() {
            let mut tags = Vec::new();
            for tag in &task.tags {
                if !tags.is_empty() {
                    tags.push(Span::raw(" "));
                }
                tags.push(create_tag_badge(tag));
            }
            lines.push(Line::from(tags));
        }
        lines.push(Line::from(""));

        ListItem::new(lines)
    }
}
