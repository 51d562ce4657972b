//! Process-wide logging bootstrap.
//!
//! The library itself only emits through the `log` facade. Binaries and
//! demos call [`init_logging`] once to route records to stderr.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;
use crate::core::error::{Error, ErrorKind, Result};

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Starts the stderr logger at `level`.
///
/// Repeated calls with the same level are no-ops; switching to a different
/// level after start is rejected. Never panics.
pub fn init_logging(level: &str) -> Result<()> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level != level {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!(
                    "logging already initialized with level `{}`; refusing to switch to `{}`",
                    state.level, level
                ),
            ));
        }
        return Ok(());
    }

    LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        let logger = Logger::try_with_str(level)
            .and_then(|logger| logger.log_to_stderr().start())
            .map_err(|err| {
                Error::new(ErrorKind::Internal, format!("failed to start logger: {}", err))
            })?;
        Ok(LoggingState {
            level,
            _logger: logger,
        })
    })?;

    info!("logging initialized at level {}", level);
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(Error::new(
            ErrorKind::InvalidArgument,
            format!("unsupported log level `{}`", other),
        )),
    }
}
