//! HTTP redirect resolution.
//!
//! Redirects are followed by hand so that every hop goes through the session's
//! cookie jar, the way a browser carries its login cookies across a
//! `302 Found`. Every hop is a `GET`, whatever the original verb.

use log::debug;
use reqwest::Method;
use url::Url;

use crate::config::HEADER_LOCATION;
use crate::cookies::CookieJar;
use crate::error_handling::ChatError;

use super::request::{origin_of, parse_endpoint};
use super::{HttpClient, Response};

/// Returns the absolute URL a redirect response points to.
///
/// The response must carry exactly one `Location` header; none or several
/// are equally ambiguous and fail with `InvalidRedirect`. Relative locations
/// are resolved against `base_origin` (e.g. `/foo` on `https://host` becomes
/// `https://host/foo`).
///
/// # Errors
///
/// Returns `InvalidRedirect` for a missing or repeated `Location`, or
/// `InvalidEndpoint` if the location cannot be made into a URL.
pub fn redirect_target(response: &Response, base_origin: &str) -> Result<String, ChatError> {
    let locations: Vec<&str> = response.header_values(HEADER_LOCATION).collect();
    let [location] = locations.as_slice() else {
        return Err(ChatError::InvalidRedirect {
            count: locations.len(),
        });
    };
    let location = location.trim();

    if let Ok(absolute) = Url::parse(location) {
        return Ok(absolute.to_string());
    }
    Url::parse(base_origin)
        .and_then(|base| base.join(location))
        .map(|joined| joined.to_string())
        .map_err(|_| ChatError::InvalidEndpoint(format!("{base_origin}{location}")))
}

/// Follows `response` through redirects until a non-redirect status.
///
/// Each hop is a `GET` carrying the same jar; relative locations resolve
/// against the origin of the hop that produced them.
///
/// # Errors
///
/// Returns `TooManyRedirects` once the client's hop bound is exceeded, plus
/// anything `redirect_target` or the transport can fail with.
pub(crate) fn resolve_redirects(
    client: &HttpClient,
    mut response: Response,
    base_origin: &str,
    mut jar: Option<&mut CookieJar>,
) -> Result<Response, ChatError> {
    let max_hops = client.max_redirect_hops();
    let mut origin = base_origin.to_string();
    let mut hops = 0;

    while response.is_redirect() {
        if hops >= max_hops {
            log::warn!(
                "Redirect chain from {} exceeded {max_hops} hops",
                response.url()
            );
            return Err(ChatError::TooManyRedirects { max: max_hops });
        }
        hops += 1;

        let target = redirect_target(&response, &origin)?;
        let endpoint = parse_endpoint(&target)?;
        debug!(
            "Redirect hop {hops}: {} ({}) -> {endpoint}",
            response.url(),
            response.status()
        );

        response = client.execute(Method::GET, &endpoint, None, jar.as_deref_mut())?;
        origin = origin_of(&endpoint);
    }

    Ok(response)
}
