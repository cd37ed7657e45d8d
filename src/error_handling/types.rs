//! Error type definitions.
//!
//! This module defines all error types used throughout the library.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::Method;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configuration handed to an initializer was invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),
}

/// A configuration field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field or environment variable
    pub field: String,
    /// Actionable description of the problem
    pub message: String,
}

/// Errors raised while talking to the chat site or reading its pages.
///
/// Construction of a [`crate::Message`] is all-or-nothing: any of these
/// aborts it. Star and pin metadata never produce an error; they degrade to
/// defaults instead.
#[derive(Error, Debug)]
pub enum ChatError {
    /// The request verb is neither `GET` nor `POST`.
    #[error("HTTP verb {0} is not supported (only GET and POST)")]
    UnsupportedVerb(Method),

    /// The request URL is missing or not an absolute http(s) URL.
    #[error("The endpoint '{0}' is not valid")]
    InvalidEndpoint(String),

    /// The request was already sent once.
    #[error("Request has already been sent")]
    AlreadySent,

    /// A redirect response carried zero or several `Location` headers.
    #[error("Redirect response carried {count} Location headers (expected exactly 1)")]
    InvalidRedirect {
        /// Number of `Location` headers found
        count: usize,
    },

    /// The redirect chain exceeded the configured hop bound.
    #[error("Gave up after {max} redirect hops")]
    TooManyRedirects {
        /// Hop bound that was exceeded
        max: usize,
    },

    /// The plain-text endpoint answered with a non-200 status.
    #[error("Unable to fetch message {id}: status {status}")]
    MessageFetchFailed {
        /// Message id
        id: u64,
        /// HTTP status returned
        status: u16,
    },

    /// The history page held no revision with text.
    #[error("History of message {id} contains no revisions")]
    NoRevisions {
        /// Message id
        id: u64,
    },

    /// A revision's author link did not have the `/users/{id}/...` shape.
    #[error("Malformed author link: '{0}'")]
    MalformedAuthorLink(String),

    /// The HTTP transport failed (connect, timeout, body read).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] ReqwestError),
}

/// Coarse category of a [`ChatError`], for counting and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// Request could not be built or was reused
    Request,
    /// Redirect chain could not be resolved
    Redirect,
    /// Message endpoint refused the fetch
    Fetch,
    /// History page could not be interpreted
    Parse,
    /// Network-level failure
    Transport,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Returns a human-readable string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Request => "Request error",
            ErrorKind::Redirect => "Redirect error",
            ErrorKind::Fetch => "Message fetch error",
            ErrorKind::Parse => "History parse error",
            ErrorKind::Transport => "HTTP transport error",
        }
    }
}

impl ChatError {
    /// Categorizes the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::UnsupportedVerb(_)
            | ChatError::InvalidEndpoint(_)
            | ChatError::AlreadySent => ErrorKind::Request,
            ChatError::InvalidRedirect { .. } | ChatError::TooManyRedirects { .. } => {
                ErrorKind::Redirect
            }
            ChatError::MessageFetchFailed { .. } => ErrorKind::Fetch,
            ChatError::NoRevisions { .. } | ChatError::MalformedAuthorLink(_) => ErrorKind::Parse,
            ChatError::Transport(_) => ErrorKind::Transport,
        }
    }
}
