//! HTTP response snapshot.

use url::Url;

use crate::config::REDIRECT_STATUS_CODES;
use crate::cookies::{cookies_from_headers, CookieRecord};

/// A fully read response: status, ordered header list, body text and the
/// cookies the server issued.
#[derive(Debug, Clone)]
pub struct Response {
    url: String,
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
    cookies: Vec<CookieRecord>,
}

impl Response {
    /// Builds a response from its parts. Cookies are read from the
    /// `Set-Cookie` entries, defaulting their domain to `url`'s host.
    pub fn from_parts(
        url: impl Into<String>,
        status: u16,
        headers: Vec<(String, String)>,
        body: impl Into<String>,
    ) -> Self {
        let url = url.into();
        let host = Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();
        let cookies = cookies_from_headers(&headers, &host);
        Self {
            url,
            status,
            headers,
            body: body.into(),
            cookies,
        }
    }

    /// Reads a blocking `reqwest` response to completion.
    pub(crate) fn from_blocking(
        response: reqwest::blocking::Response,
    ) -> Result<Self, reqwest::Error> {
        let url = response.url().to_string();
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect::<Vec<_>>();
        log::trace!("Response headers for {url}: {headers:?}");
        let body = response.text()?;
        Ok(Self::from_parts(url, status, headers, body))
    }

    /// URL that produced this response.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Every header in arrival order; names may repeat.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// All values of the header `name`, matched case-insensitively.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Response body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response, returning its body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Cookies issued by this response.
    pub fn cookies(&self) -> &[CookieRecord] {
        &self.cookies
    }

    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if the status is one the redirect resolver follows.
    pub fn is_redirect(&self) -> bool {
        REDIRECT_STATUS_CODES.contains(&self.status)
    }
}
