//! Keyboard input handling for the dashboard.
//!
//! # Key Bindings
//!
//! | Key       | Action               |
//! |-----------|----------------------|
//! | `1`-`4`   | Last 60 min / 24 h / 30 days / year |
//! | `r`       | Refresh now          |
//! | `e`       | Export CSV           |
//! | `t`       | Toggle theme         |
//! | `?`       | Toggle help          |
//! | `q` / `Esc` | Quit (Esc closes help first) |

use crossterm::event::KeyCode;
use sporehouse_core::{Command, Window};

use super::app::App;

/// User actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Fetch now.
    Refresh,
    /// Show a different window of the history.
    SelectWindow(Window),
    /// Export the full history to CSV.
    ExportCsv,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Toggle theme.
    ToggleTheme,
    /// No action (unrecognized key).
    None,
}

/// Map a key code to an action.
///
/// While the help overlay is open only the keys that close it or quit are
/// recognized.
pub fn handle_key(key: KeyCode, help_visible: bool) -> Action {
    if help_visible {
        return match key {
            KeyCode::Char('?') | KeyCode::Esc => Action::ToggleHelp,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('1') => Action::SelectWindow(Window::LastHour),
        KeyCode::Char('2') => Action::SelectWindow(Window::LastDay),
        KeyCode::Char('3') => Action::SelectWindow(Window::LastMonth),
        KeyCode::Char('4') => Action::SelectWindow(Window::LastYear),
        KeyCode::Char('e') => Action::ExportCsv,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

/// Apply an action to the application state.
///
/// Returns a command for the worker when the action needs one.
pub fn apply_action(app: &mut App, action: Action) -> Option<Command> {
    match action {
        Action::Quit => {
            app.should_quit = true;
            None
        }
        Action::Refresh => {
            app.push_status_message("Refreshing...".to_string());
            Some(Command::Refresh)
        }
        Action::SelectWindow(window) => {
            app.select_window(window);
            None
        }
        Action::ExportCsv => {
            match app.export_history() {
                Ok(path) => app.push_status_message(format!("Exported to {}", path.display())),
                Err(e) => app.push_status_message(e.to_string()),
            }
            None
        }
        Action::ToggleHelp => {
            app.show_help = !app.show_help;
            None
        }
        Action::ToggleTheme => {
            app.toggle_theme();
            None
        }
        Action::None => None,
    }
}
