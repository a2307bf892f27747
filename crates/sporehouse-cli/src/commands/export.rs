//! Export command implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use sporehouse_core::{DataStore, FetchOutcome, export_csv, run_fetch_cycle};

use crate::config::Settings;
use crate::util::{build_source, today, write_export};

/// Run one fetch cycle and write the full history as CSV.
///
/// Without `output` the file lands in the configured export directory as
/// `mushroom_monitor_YYYY-MM-DD.csv`.
pub async fn cmd_export(settings: &Settings, output: Option<&PathBuf>, quiet: bool) -> Result<()> {
    let source = build_source(settings)?;
    let mut store = DataStore::new();

    if let FetchOutcome::Failed { message } = run_fetch_cycle(&source, &mut store).await {
        bail!("Fetch failed: {}", message);
    }

    let path = match output {
        Some(path) => write_to(path, store.history())?,
        None => write_export(&settings.export_directory, store.history(), today())?,
    };

    if !quiet {
        eprintln!("Exported {} readings to {}", store.len(), path.display());
    }
    Ok(())
}

fn write_to(path: &Path, history: &[sporehouse_core::Reading]) -> Result<PathBuf> {
    let content = export_csv(history)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write to {}", path.display()))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sporehouse_core::Window;
    use std::time::Duration;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_export_demo_into_directory() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            endpoint_url: None,
            refresh_interval: Duration::from_secs(60),
            request_timeout: Duration::from_secs(10),
            default_window: Window::LastHour,
            export_directory: dir.path().to_path_buf(),
            table_rows: 10,
            demo: true,
        };

        cmd_export(&settings, None, true).await.unwrap();

        let files: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("mushroom_monitor_"));
        assert!(files[0].ends_with(".csv"));
    }
}
