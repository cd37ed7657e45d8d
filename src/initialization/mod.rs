//! Library initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources a host
//! process needs before fetching messages:
//! - The blocking HTTP client (redirects disabled, timeouts applied)
//! - The logger
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
