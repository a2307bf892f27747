//! Config command implementation.

use anyhow::{Context, Result};

use crate::cli::ConfigAction;
use crate::config::Config;

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    let path = Config::path();

    match action {
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            if !path.exists() {
                eprintln!("No config file at {} (showing defaults)", path.display());
            }
            let config = Config::load();
            let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{}", content);
        }
        ConfigAction::Init => {
            if path.exists() {
                println!("Config already exists: {}", path.display());
                return Ok(());
            }
            Config::default().save()?;
            println!("Created config: {}", path.display());
        }
    }

    Ok(())
}
