//! Terminal client entry point.
mod app;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use app::App;
use runtime::{FileProgressStore, MatchSession};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let dirs = directories::ProjectDirs::from("", "", "skirmish")
        .context("could not determine platform directories")?;

    setup_logging(dirs.cache_dir().join("logs"))?;

    let config = runtime::load_or_default(dirs.config_dir().join("config.json"))?;
    let progress = Arc::new(
        FileProgressStore::open(dirs.data_dir().join("progress.json"))
            .context("failed to open progress store")?,
    );

    let (session, opening) = MatchSession::new(config.battle, progress, config.seed)?;

    let terminal = ratatui::init();
    let result = App::new(session, opening).run(terminal);
    ratatui::restore();

    tracing::info!("client exiting");
    result
}

/// Log to a file only; stderr belongs to the TUI.
fn setup_logging(log_dir: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "skirmish.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer().with_writer(non_blocking_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!("logging initialized: {}/skirmish.log", log_dir.display());
    Ok(())
}
