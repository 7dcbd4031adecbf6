//! File-based tracing setup.
//!
//! Console output belongs to the game narration, so logs only ever go to a
//! per-session file.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialise the global subscriber. Returns the log file path.
///
/// Logs go to `<log_dir>/<session_id>/client.log`; the filter comes from
/// `RUST_LOG` and defaults to `info`.
pub fn setup_logging(session_id: &Option<String>, log_dir: Option<&Path>) -> Result<PathBuf> {
    let log_dir = log_dir.map_or_else(default_log_directory, Path::to_path_buf);

    // Create session ID if not provided
    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // Only the file layer: stdout carries the narration
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    let log_file = session_log_dir.join("client.log");
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/dungeon/logs`
/// - Linux: `~/.cache/dungeon/logs` (or `$XDG_CACHE_HOME/dungeon/logs`)
/// - Windows: `%LOCALAPPDATA%\dungeon\logs`
/// - Fallback: `/tmp/dungeon/logs`
pub fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/dungeon"))
        .join("logs")
}
