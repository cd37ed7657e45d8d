//! Error handling.
//!
//! This module provides the error taxonomy of the library:
//! - **`ChatError`**: request, redirect, fetch and history-parse failures
//! - **`InitializationError`**: logger and HTTP client setup failures
//! - **`ConfigValidationError`**: invalid configuration values
//!
//! `ChatError::kind()` maps each error onto a coarse `ErrorKind` for callers
//! that count or report failures by category.

mod types;

// Re-export public API
pub use types::{ChatError, ConfigValidationError, ErrorKind, InitializationError};
