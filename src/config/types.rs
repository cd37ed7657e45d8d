//! Configuration types.
//!
//! This module defines the enums and structs used to configure the HTTP
//! client, redirect handling and logging.

use std::str::FromStr;

use strum_macros::{Display as DisplayMacro, EnumString};

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ENV_LOG_FORMAT, ENV_LOG_LEVEL,
    ENV_MAX_REDIRECT_HOPS, ENV_SCHEME, ENV_TIMEOUT_SECONDS, ENV_USER_AGENT, MAX_REDIRECT_HOPS,
};
use crate::error_handling::ConfigValidationError;

/// Logging level for the library.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, DisplayMacro)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, DisplayMacro)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Scheme used when rendering the chat endpoint templates.
///
/// The live site is only reachable over `https`; `http` exists for local
/// fixtures and proxies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, DisplayMacro)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum UrlScheme {
    /// Plain HTTP
    Http,
    /// HTTP over TLS (default)
    Https,
}

/// Library configuration.
///
/// # Examples
///
/// ```
/// use chat_history::Config;
///
/// let config = Config {
///     timeout_seconds: 30,
///     max_redirect_hops: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Redirect hops followed before giving up with `TooManyRedirects`
    pub max_redirect_hops: usize,

    /// Scheme used for message endpoints
    pub scheme: UrlScheme,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_redirect_hops: MAX_REDIRECT_HOPS,
            scheme: UrlScheme::Https,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Builds a configuration from defaults overlaid with `CHAT_*` environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the variable whose value could
    /// not be parsed, or the field that failed validation.
    pub fn from_env() -> Result<Self, ConfigValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads values through `lookup`.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECONDS) {
            config.timeout_seconds = parse_env(ENV_TIMEOUT_SECONDS, &timeout)?;
        }
        if let Some(hops) = lookup(ENV_MAX_REDIRECT_HOPS) {
            config.max_redirect_hops = parse_env(ENV_MAX_REDIRECT_HOPS, &hops)?;
        }
        if let Some(scheme) = lookup(ENV_SCHEME) {
            config.scheme = parse_env(ENV_SCHEME, &scheme)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = parse_env(ENV_LOG_LEVEL, &level)?;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.log_format = parse_env(ENV_LOG_FORMAT, &format)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first offending field together with an actionable message.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent".to_string(),
                message: "user_agent must not be empty; the chat site rejects anonymous clients"
                    .to_string(),
            });
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds".to_string(),
                message: "timeout_seconds must be greater than 0".to_string(),
            });
        }
        if self.max_redirect_hops == 0 {
            return Err(ConfigValidationError {
                field: "max_redirect_hops".to_string(),
                message: "max_redirect_hops must be greater than 0 to follow login redirects"
                    .to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigValidationError> {
    raw.trim().parse::<T>().map_err(|_| ConfigValidationError {
        field: key.to_string(),
        message: format!("could not parse '{raw}' for {key}"),
    })
}
