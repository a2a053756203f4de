use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default log file location for sessions that cannot write to stderr (the TUI).
pub fn default_log_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "nexus").map(|dirs| dirs.cache_dir().join("nexus.log"))
}

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file, written as JSON with daily rotation
/// * `stderr` - Also log to stderr (disabled while the TUI owns the terminal)
pub fn init(verbose: bool, log_file: Option<PathBuf>, stderr: bool) {
    // Determine log level from verbose flag or RUST_LOG env var
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nexus={}", default_level)));

    let stderr_layer = stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let file_layer = log_file.map(|log_path| {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file_appender = tracing_appender::rolling::daily(
            log_path.parent().unwrap_or_else(|| Path::new(".")),
            log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("nexus.log")),
        );

        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false) // No colors in file
            .json()
    });

    // A second init (tests, embedding) is not an error.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}
