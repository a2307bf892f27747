//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Reusable endpoint arguments
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Spreadsheet endpoint URL, or use SPOREHOUSE_URL env var
    #[arg(short, long, global = true, env = "SPOREHOUSE_URL")]
    pub url: Option<String>,

    /// Polling interval in seconds, or use SPOREHOUSE_INTERVAL env var
    #[arg(short, long, global = true, env = "SPOREHOUSE_INTERVAL")]
    pub interval: Option<u64>,

    /// Request timeout in seconds
    #[arg(short = 'T', long, global = true)]
    pub timeout: Option<u64>,

    /// Use generated demo readings instead of the endpoint
    #[arg(long, global = true)]
    pub demo: bool,
}

#[derive(Parser)]
#[command(name = "sporehouse")]
#[command(author, version, about = "Live dashboard for mushroom house sensor readings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive terminal dashboard (default)
    #[cfg(feature = "tui")]
    Dashboard,

    /// Fetch once and print the readings in a window
    Fetch {
        /// Window to print: 60, day, month or year (defaults to the configured range)
        #[arg(short, long)]
        range: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Poll continuously and print one status line per fetch
    Watch {
        /// Number of fetches before exiting (0 for unlimited)
        #[arg(short = 'n', long, default_value = "0")]
        count: u32,
    },

    /// Fetch once and export the full history as CSV
    Export {
        /// Output file (defaults to mushroom_monitor_YYYY-MM-DD.csv in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Configuration subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init,
}
