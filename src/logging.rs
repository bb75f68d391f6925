use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::CliArgs;

/// Installs the global subscriber. The terminal belongs to the UI, so logs
/// only go to a file, and only when one was requested.
pub fn init_logging(args: &CliArgs) -> Result<()> {
    let Some(log_path) = &args.log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.to_string()));

    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).wrap_err("Failed to create log directory")?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .wrap_err("Failed to open log file")?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = %log_path.display(), "Logging initialized");
    Ok(())
}
