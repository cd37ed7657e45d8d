//! The `Message` aggregate.

use std::fmt;

use log::{debug, warn};
use scraper::Html;
use serde::Serialize;

use crate::config::MAX_HTML_PREVIEW_CHARS;
use crate::cookies::{CookieJar, CookieRecord};
use crate::error_handling::ChatError;
use crate::http::HttpClient;

use super::fetch::{fetch_message_text, message_history_url};
use super::history::{parse_history, Revision};
use super::stars::extract_star_pin;

/// A chat message with its full edit history and star/pin metadata.
///
/// Built in one go from the plain-text endpoint and the history page, and
/// never modified afterwards. Identity is the message id alone; see
/// [`Message::is_same_message`].
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    host: String,
    id: u64,
    author_id: i64,
    author_name: String,
    text: String,
    stars: u32,
    is_pinned: bool,
    pinner: Option<i64>,
    revisions: Vec<Revision>,
}

impl Message {
    /// Fetches message `id` from `host`.
    ///
    /// Makes two requests through `client`, both carrying `jar` when given:
    /// the plain-text endpoint, then the history page.
    ///
    /// # Errors
    ///
    /// - `MessageFetchFailed` if the plain-text endpoint does not answer 200
    /// - `NoRevisions` / `MalformedAuthorLink` if the history page cannot be
    ///   read
    /// - request, redirect and transport errors
    ///
    /// No partially built message is ever returned. Star and pin metadata
    /// fall back to defaults instead of failing.
    pub fn fetch(
        client: &HttpClient,
        host: &str,
        id: u64,
        mut jar: Option<&mut CookieJar>,
    ) -> Result<Self, ChatError> {
        let text = fetch_message_text(client, host, id, jar.as_deref_mut())?;

        let history_url = message_history_url(client.scheme(), host, id);
        let response = client.get(&history_url, jar)?;
        if !response.is_success() {
            warn!(
                "History page for message {id} on {host} returned status {}",
                response.status()
            );
        }

        Self::from_history_html(host, id, text, response.body())
    }

    /// Fetches message `id` from `host` using a fresh jar seeded with
    /// `cookies` (typically the output of a login flow).
    pub fn fetch_with_cookies<I>(
        client: &HttpClient,
        host: &str,
        id: u64,
        cookies: I,
    ) -> Result<Self, ChatError>
    where
        I: IntoIterator<Item = CookieRecord>,
    {
        let mut jar = CookieJar::from_records(cookies);
        Self::fetch(client, host, id, Some(&mut jar))
    }

    /// Builds a message from its current text and an already downloaded
    /// history page.
    ///
    /// # Errors
    ///
    /// Returns `NoRevisions` or `MalformedAuthorLink` if the history page
    /// cannot be read.
    pub fn from_history_html(
        host: &str,
        id: u64,
        text: String,
        history_html: &str,
    ) -> Result<Self, ChatError> {
        let document = Html::parse_document(history_html);

        let revisions = parse_history(&document, id).inspect_err(|_| {
            let preview: String = history_html.chars().take(MAX_HTML_PREVIEW_CHARS).collect();
            debug!("History page preview for message {id}: {preview}");
        })?;
        let star_pin = extract_star_pin(&document);

        // The first revision's author wrote the message; later ones edited it
        let original = &revisions[0];
        Ok(Self {
            host: host.to_string(),
            id,
            author_id: original.author_id,
            author_name: original.author_name.clone(),
            text,
            stars: star_pin.stars,
            is_pinned: star_pin.is_pinned,
            pinner: star_pin.pinner,
            revisions,
        })
    }

    /// Returns true if both values describe the same message, i.e. their ids
    /// match. Host and content are not compared.
    pub fn is_same_message(&self, other: &Message) -> bool {
        self.id == other.id
    }

    /// Host the message was fetched from.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Message id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Id of the original author.
    pub fn author_id(&self) -> i64 {
        self.author_id
    }

    /// Display name of the original author.
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Current text, as served by the plain-text endpoint.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of stars.
    pub fn stars(&self) -> u32 {
        self.stars
    }

    /// Whether the history page shows the star/pin marker.
    pub fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    /// Id of the pinning user, or `0` when the page does not name one.
    ///
    /// `0` is ambiguous with a real user id; prefer [`Message::pinner`].
    pub fn pinned_by(&self) -> i64 {
        self.pinner.unwrap_or(0)
    }

    /// Id of the pinning user, if known.
    pub fn pinner(&self) -> Option<i64> {
        self.pinner
    }

    /// Every revision, oldest first. Never empty.
    pub fn revisions(&self) -> &[Revision] {
        &self.revisions
    }

    /// The most recent revision.
    pub fn latest_revision(&self) -> &Revision {
        // revisions is non-empty by construction
        &self.revisions[self.revisions.len() - 1]
    }

    /// Returns true if the message has more than one revision.
    pub fn was_edited(&self) -> bool {
        self.revisions.len() > 1
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
