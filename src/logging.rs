//! File-based logging setup
//!
//! The terminal belongs to the dashboard, so log output goes to a file: the
//! `--log-file` path if given, otherwise `aqitrend.log` in the platform's
//! local data directory (`~/.local/share/aqitrend/` on Linux). Verbosity is
//! read from `AQITREND_LOG` using `EnvFilter` syntax and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "AQITREND_LOG";

/// Errors that can occur while setting up logging
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file or its directory could not be created
    #[error("cannot open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A global subscriber was already installed
    #[error("cannot install log subscriber: {0}")]
    Init(String),
}

/// Returns the default log file path, if a data directory can be determined
pub fn default_log_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "aqitrend")?;
    Some(project_dirs.data_local_dir().join("aqitrend.log"))
}

/// Opens `path` for appending, creating parent directories as needed
fn open_log_file(path: &Path) -> Result<fs::File, LoggingError> {
    let io_err = |source: std::io::Error| LoggingError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)
}

/// Installs the global tracing subscriber.
///
/// # Returns
/// * `Ok(Some(path))` - the file logs are written to
/// * `Ok(None)` - no path was given and no data directory exists; logging is off
/// * `Err(LoggingError)` - the file could not be opened or a subscriber exists
pub fn init(log_file: Option<&Path>) -> Result<Option<PathBuf>, LoggingError> {
    let Some(path) = log_file.map(Path::to_path_buf).or_else(default_log_path) else {
        return Ok(None);
    };

    let file = open_log_file(&path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(Some(path))
}
