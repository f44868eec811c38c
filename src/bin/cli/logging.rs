use crate::constants::{LOG_DIR, LOG_ENV, LOG_FILE};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

/// Sends `tracing` output to `~/.runpad/runpad.log`. The terminal belongs to
/// the editor, so when the file cannot be opened logging stays off.
pub(crate) fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let log_dir = PathBuf::from(home).join(LOG_DIR);
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let log_path = log_dir.join(LOG_FILE);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("runpad=info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        tracing::info!(path = ?log_path, "runpad tracing initialized");
    }
}
