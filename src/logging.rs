// src/logging.rs

use crate::constants::APP_DIR_NAME;
use crate::errors::ChatResult;
use flexi_logger::{detailed_format, FileSpec, Logger, LoggerHandle};
use std::path::PathBuf;

/// Starts the file logger. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr. `RUST_LOG` overrides `level`.
///
/// Keep the returned handle alive for as long as logging is needed.
pub fn init_logging(level: &str) -> ChatResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir())
                .basename(APP_DIR_NAME)
                .suppress_timestamp(),
        )
        .append()
        .format(detailed_format)
        .start()?;

    Ok(handle)
}

pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
