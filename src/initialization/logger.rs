//! Logger setup for embedding applications.
//!
//! The library itself only emits `log` records; a bot or CLI that wants them
//! printed calls [`init_logger_with`] once at startup.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Installs an `env_logger` that prints redirect hops, cookie captures and
/// history parsing at `level`.
///
/// `Plain` writes `HH:MM:SS.mmm target [LEVEL] message` with colored levels;
/// `Json` writes one object per line with a millisecond epoch `ts`. HTML
/// parser chatter from `html5ever` and `selectors` is held back regardless
/// of `level`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // The history pages are tag soup; html5ever reports every recovery
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("chat_history", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_plain_format() {
        // env_logger can only be initialized once per process
        let result = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(result.is_ok() || matches!(result, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_init_logger_json_format() {
        let result = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(result.is_ok() || matches!(result, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_second_init_fails_without_panicking() {
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Trace, LogFormat::Plain);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
