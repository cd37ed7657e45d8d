//! Request execution.
//!
//! `HttpClient` sends one [`Request`] at a time, attaching the cookies its
//! jar holds for the target host and merging returned cookies back. Redirects
//! are resolved before the caller sees the response.

use log::debug;
use reqwest::Method;
use url::Url;

use crate::config::{Config, UrlScheme, SUPPORTED_METHODS};
use crate::cookies::CookieJar;
use crate::error_handling::{ChatError, InitializationError};
use crate::initialization::init_client;

use super::redirects::resolve_redirects;
use super::request::{origin_of, parse_endpoint, RequestHeaders, RequestState};
use super::{Request, Response};

/// Blocking HTTP client that emulates a browser session over a cookie jar.
///
/// The client itself is stateless between calls; all session state lives in
/// the `CookieJar` attached to each request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    max_redirect_hops: usize,
    scheme: UrlScheme,
}

impl HttpClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the config is invalid or the
    /// underlying client cannot be created.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
            max_redirect_hops: config.max_redirect_hops,
            scheme: config.scheme,
        })
    }

    /// Maximum number of redirect hops followed per request.
    pub fn max_redirect_hops(&self) -> usize {
        self.max_redirect_hops
    }

    /// Scheme used for message endpoints.
    pub fn scheme(&self) -> UrlScheme {
        self.scheme
    }

    /// Sends `request` and returns the fully redirect-resolved response.
    ///
    /// # Errors
    ///
    /// - `UnsupportedVerb` if the verb is not `GET` or `POST`
    /// - `InvalidEndpoint` if the URL is not an absolute http(s) URL
    /// - `AlreadySent` if `request` was sent before
    /// - `InvalidRedirect` / `TooManyRedirects` from redirect resolution
    /// - `Transport` on network failure
    ///
    /// The request counts as sent once it passes validation, even if the
    /// transport then fails.
    pub fn send(&self, request: &mut Request<'_>) -> Result<Response, ChatError> {
        if !SUPPORTED_METHODS.contains(&request.method) {
            return Err(ChatError::UnsupportedVerb(request.method.clone()));
        }
        let endpoint = parse_endpoint(&request.url)?;
        if request.state == RequestState::Sent {
            return Err(ChatError::AlreadySent);
        }
        request.state = RequestState::Sent;

        let mut jar = request.jar.as_deref_mut();
        let response = self.execute(
            request.method.clone(),
            &endpoint,
            request.form.as_deref(),
            jar.as_deref_mut(),
        )?;

        if !response.is_redirect() {
            return Ok(response);
        }
        resolve_redirects(self, response, &origin_of(&endpoint), jar)
    }

    /// Sends a `GET` to `url` and returns the resolved response.
    pub fn get(&self, url: &str, jar: Option<&mut CookieJar>) -> Result<Response, ChatError> {
        self.send(&mut Request::get(url).with_optional_jar(jar))
    }

    /// Sends a `GET` to `url` and returns the body of the resolved response,
    /// whatever its status.
    pub fn get_text(&self, url: &str, jar: Option<&mut CookieJar>) -> Result<String, ChatError> {
        Ok(self.get(url, jar)?.into_body())
    }

    /// Performs a single HTTP exchange with no redirect handling.
    pub(crate) fn execute(
        &self,
        method: Method,
        endpoint: &Url,
        form: Option<&[(String, String)]>,
        jar: Option<&mut CookieJar>,
    ) -> Result<Response, ChatError> {
        let host = endpoint.host_str().unwrap_or_default().to_string();

        let mut builder = RequestHeaders::apply_to_request_builder(
            self.client.request(method.clone(), endpoint.clone()),
        );
        if let Some(cookie_header) = jar.as_deref().and_then(|j| j.header_for(&host)) {
            builder = builder.header(reqwest::header::COOKIE, cookie_header);
        }
        if let Some(fields) = form {
            builder = builder.form(fields);
        }

        debug!("{method} {endpoint}");
        let response = Response::from_blocking(builder.send()?)?;
        debug!("{method} {endpoint} -> {}", response.status());

        if let Some(jar) = jar {
            if !response.cookies().is_empty() {
                debug!("Captured {} cookie(s) from {host}", response.cookies().len());
            }
            jar.add_records(response.cookies().iter().cloned());
        }
        Ok(response)
    }
}
