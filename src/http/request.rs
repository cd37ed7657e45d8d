//! HTTP request construction.
//!
//! A [`Request`] is single-use: the executor marks it sent on dispatch and
//! refuses to send it again, so a form `POST` can never be replayed by
//! accident.

use reqwest::Method;
use url::Url;

use crate::config::{ACCEPT_LANGUAGE_VALUE, ACCEPT_VALUE};
use crate::cookies::CookieJar;
use crate::error_handling::ChatError;

/// Whether a request has been handed to the transport yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequestState {
    Unsent,
    Sent,
}

/// One outgoing request: verb, absolute URL, optional form body and an
/// optional borrowed cookie jar.
#[derive(Debug)]
pub struct Request<'j> {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) form: Option<Vec<(String, String)>>,
    pub(crate) jar: Option<&'j mut CookieJar>,
    pub(crate) state: RequestState,
}

impl<'j> Request<'j> {
    /// Creates an unsent request. The verb and URL are checked when sent.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            form: None,
            jar: None,
            state: RequestState::Unsent,
        }
    }

    /// Creates a `GET` request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Creates a `POST` request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Attaches form fields, sent as `application/x-www-form-urlencoded`.
    pub fn with_form<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.form = Some(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Attaches the session's cookie jar. Matching cookies are sent and
    /// returned cookies are merged back into it.
    pub fn with_jar(self, jar: &'j mut CookieJar) -> Self {
        self.with_optional_jar(Some(jar))
    }

    /// Attaches a cookie jar if one is given.
    pub fn with_optional_jar(mut self, jar: Option<&'j mut CookieJar>) -> Self {
        self.jar = jar;
        self
    }

    /// The request verb.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request URL as given.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The attached cookie jar, if any.
    pub fn jar(&self) -> Option<&CookieJar> {
        self.jar.as_deref()
    }

    /// Returns true once the request has been dispatched.
    pub fn is_sent(&self) -> bool {
        self.state == RequestState::Sent
    }
}

/// Parses `url` as an absolute `http`/`https` URL with a host.
pub(crate) fn parse_endpoint(url: &str) -> Result<Url, ChatError> {
    let invalid = || ChatError::InvalidEndpoint(url.to_string());
    let parsed = Url::parse(url).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(invalid());
    }
    Ok(parsed)
}

/// Scheme, host and port of `url`, e.g. `https://chat.example.com`.
pub(crate) fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Browser-like headers attached to every request.
///
/// Some history pages are only rendered in full for clients that look like
/// a navigating browser.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a blocking `RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, ACCEPT_VALUE)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE)
    }
}
