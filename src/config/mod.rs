//! Library configuration and constants.
//!
//! This module provides:
//! - Configuration constants (redirect limits, endpoint paths, defaults)
//! - HTTP header constants
//! - The `Config` struct and its logging/scheme enums

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, UrlScheme};
