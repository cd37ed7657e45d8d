//! Plain-text message fetching.
//!
//! `message_exists` and `fetch_message_text` hit the same endpoint but
//! report failure differently: the existence check swallows every error into
//! `false`, while the strict fetch surfaces the status.

use crate::config::{UrlScheme, HTTP_STATUS_OK, MESSAGE_HISTORY_PATH, MESSAGE_TEXT_PATH};
use crate::cookies::CookieJar;
use crate::error_handling::ChatError;
use crate::http::HttpClient;

/// Outcome of a plain-text fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFetch {
    /// The endpoint answered 200 with this body
    Found(String),
    /// The endpoint answered with any other status
    Failed {
        /// HTTP status returned
        status: u16,
    },
}

/// URL of the plain-text rendering of message `id` on `host`.
pub fn message_text_url(scheme: UrlScheme, host: &str, id: u64) -> String {
    format!(
        "{scheme}://{host}{}",
        MESSAGE_TEXT_PATH.replace("{id}", &id.to_string())
    )
}

/// URL of the revision history page of message `id` on `host`.
pub fn message_history_url(scheme: UrlScheme, host: &str, id: u64) -> String {
    format!(
        "{scheme}://{host}{}",
        MESSAGE_HISTORY_PATH.replace("{id}", &id.to_string())
    )
}

/// Fetches the plain text of a message, reporting non-200 statuses as
/// `TextFetch::Failed`.
///
/// # Errors
///
/// Returns request, redirect or transport errors.
pub fn fetch_text_with_status(
    client: &HttpClient,
    host: &str,
    id: u64,
    jar: Option<&mut CookieJar>,
) -> Result<TextFetch, ChatError> {
    let url = message_text_url(client.scheme(), host, id);
    let response = client.get(&url, jar)?;
    if response.status() == HTTP_STATUS_OK {
        Ok(TextFetch::Found(response.into_body()))
    } else {
        log::debug!("Message {id} on {host}: status {}", response.status());
        Ok(TextFetch::Failed {
            status: response.status(),
        })
    }
}

/// Returns true if message `id` exists on `host` and is readable with the
/// given cookies.
///
/// Never fails: any status other than 200, and any transport or redirect
/// error, counts as absent.
pub fn message_exists(
    client: &HttpClient,
    host: &str,
    id: u64,
    jar: Option<&mut CookieJar>,
) -> bool {
    match fetch_text_with_status(client, host, id, jar) {
        Ok(TextFetch::Found(_)) => true,
        Ok(TextFetch::Failed { .. }) => false,
        Err(e) => {
            log::debug!("Existence check for message {id} on {host} failed: {e}");
            false
        }
    }
}

/// Fetches the plain text of message `id` on `host`.
///
/// # Errors
///
/// Returns `MessageFetchFailed` with the status when the endpoint does not
/// answer 200, or any request, redirect or transport error.
pub fn fetch_message_text(
    client: &HttpClient,
    host: &str,
    id: u64,
    jar: Option<&mut CookieJar>,
) -> Result<String, ChatError> {
    match fetch_text_with_status(client, host, id, jar)? {
        TextFetch::Found(text) => Ok(text),
        TextFetch::Failed { status } => Err(ChatError::MessageFetchFailed { id, status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_urls() {
        assert_eq!(
            message_text_url(UrlScheme::Https, "chat.stackexchange.com", 42),
            "https://chat.stackexchange.com/message/42?plain=true"
        );
        assert_eq!(
            message_history_url(UrlScheme::Https, "chat.stackexchange.com", 42),
            "https://chat.stackexchange.com/messages/42/history"
        );
        assert_eq!(
            message_text_url(UrlScheme::Http, "127.0.0.1:8080", 1),
            "http://127.0.0.1:8080/message/1?plain=true"
        );
    }
}
