// src/logging.rs

use crate::errors::{YurisError, YurisResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts the file logger. Everything goes to `yuris_*.log` next to the
/// binary's working directory; the terminal itself belongs to ratatui.
pub fn init_logging(level: &str) -> YurisResult<LoggerHandle> {
    let handle = Logger::try_with_str(level)
        .map_err(|e| YurisError::logging_error(format!("Invalid log spec: {}", e)))?
        .log_to_file(FileSpec::default().basename("yuris").suppress_timestamp())
        .append()
        .start()
        .map_err(|e| YurisError::logging_error(format!("Failed to start logger: {}", e)))?;

    Ok(handle)
}
