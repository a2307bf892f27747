//! Terminal dashboard.
//!
//! Ties together the dashboard components and runs the main event loop:
//!
//! - Terminal setup and restoration
//! - Spawning the [`FetchWorker`] and wiring its channels
//! - Input handling and rendering
//! - Graceful shutdown of the worker

pub mod app;
pub mod input;
pub mod ui;

pub use app::App;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use sporehouse_core::{Command, DashboardEvent, FetchWorker};
use tokio::sync::mpsc;
use tracing::info;

use crate::config::Settings;
use crate::util::build_source;

/// Set up the terminal for rendering.
///
/// Enables raw mode and switches to the alternate screen buffer.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits.
pub async fn run(settings: &Settings) -> Result<()> {
    let source = build_source(settings)?;
    let endpoint = source.endpoint().to_string();

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(32);
    let (event_tx, event_rx) = mpsc::channel::<DashboardEvent>(32);

    let worker = FetchWorker::new(source, cmd_rx, event_tx, settings.refresh_interval);
    let cancel = worker.cancel_token();
    let worker_handle = tokio::spawn(worker.run());

    let mut app = App::new(cmd_tx.clone(), event_rx, settings, endpoint);
    let mut terminal = setup_terminal()?;
    info!("Dashboard started");

    let result = run_event_loop(&mut terminal, &mut app).await;

    // A fetch may be in flight, so cancel rather than wait for it.
    let _ = cmd_tx.try_send(Command::Shutdown);
    cancel.cancel();

    restore_terminal()?;
    let _ = worker_handle.await;
    info!("Dashboard stopped");

    result
}

/// Main event loop for the dashboard.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit() {
        app.clean_expired_messages();

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let action = input::handle_key(key.code, app.show_help);
            if let Some(cmd) = input::apply_action(app, action) {
                let _ = app.command_tx.try_send(cmd);
            }
        }

        // Non-blocking receive of worker events
        while let Ok(event) = app.event_rx.try_recv() {
            app.handle_event(event);
        }
    }

    Ok(())
}
