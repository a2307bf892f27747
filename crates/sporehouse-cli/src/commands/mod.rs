//! Command implementations for the CLI.

mod config;
mod export;
mod fetch;
mod watch;

pub use config::cmd_config;
pub use export::cmd_export;
pub use fetch::{FetchArgs, cmd_fetch};
pub use watch::cmd_watch;
