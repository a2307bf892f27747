//! Range filtering over the reading history.
//!
//! Windows are positional: the history is assumed to hold one reading per
//! minute, so each window is simply the last N entries. Timestamps are not
//! consulted. If the sampling rate drifts, "last 24 h" means "last 1440
//! readings".

use sporehouse_types::{Reading, Window};

/// Return the trailing readings covered by `window`, oldest first.
///
/// A history shorter than the window is returned whole.
#[must_use]
pub fn filter(history: &[Reading], window: Window) -> &[Reading] {
    let start = history.len().saturating_sub(window.max_readings());
    &history[start..]
}

/// Filter by a window key such as `"60"`, `"day"`, `"month"` or `"year"`.
///
/// An unknown key selects the entire history unchanged.
#[must_use]
pub fn filter_named<'a>(history: &'a [Reading], key: &str) -> &'a [Reading] {
    match Window::parse_key(key) {
        Some(window) => filter(history, window),
        None => history,
    }
}
