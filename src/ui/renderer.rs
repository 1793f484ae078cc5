//! Main UI rendering and coordination

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::path::Path;
use std::time::Duration;

use super::app::{App, View};
use super::components::{BoardView, DeadlinesList, RecentEventsList, StatusBar, SummaryCards};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::snapshot::Snapshot;

/// How long to wait for input before redrawing with a fresh clock reading
const TICK: Duration = Duration::from_millis(250);

/// Run the main TUI application on the snapshot at `snapshot_path`
pub fn run_app(config: Config, snapshot_path: &Path) -> Result<()> {
    let now = Local::now().fixed_offset();
    let options = config.triage.ingest_options(*now.offset());
    let ingested = Snapshot::load(snapshot_path, &options)
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path.display()))?;

    let mut app = App::new(config, ingested, now).with_snapshot_path(snapshot_path);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main application loop
    let res = run_ui(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // The only clock reading: everything below gets "now" from the app
        app.set_now(Local::now().fixed_offset());
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK)? {
            let event = event::read()?;
            if !matches!(event, Event::Resize(_, _)) {
                handle_events(&event, app);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the active view and the status bar
pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = LayoutManager::main_layout(f.area());

    match app.view {
        View::Dashboard => {
            let dashboard = LayoutManager::dashboard_layout(chunks[0]);
            SummaryCards::render(f, dashboard[0], app);

            let widgets = LayoutManager::columns(dashboard[1], 2);
            RecentEventsList::render(f, widgets[0], app);
            DeadlinesList::render(f, widgets[1], app);
        }
        View::Board => BoardView::render(f, chunks[0], app),
    }

    StatusBar::render(f, chunks[1], app);
}
