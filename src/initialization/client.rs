//! HTTP client initialization.

use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the blocking HTTP client used for every chat request.
///
/// Creates a `reqwest::blocking::Client` configured with:
/// - User-Agent header from the config
/// - Timeout from the config
/// - Automatic redirects disabled, so each hop passes through the cookie jar
/// - No built-in cookie store (the caller's `CookieJar` is the only session state)
///
/// # Errors
///
/// Returns `InitializationError::InvalidConfig` if the config fails
/// validation, or `InitializationError::HttpClientError` if client creation
/// fails.
pub fn init_client(config: &Config) -> Result<Client, InitializationError> {
    config.validate()?;

    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
