//! `Set-Cookie` header parsing.

use crate::config::HEADER_SET_COOKIE;

use super::types::CookieRecord;

/// Extracts every cookie issued through `Set-Cookie` headers.
///
/// Headers that do not start with a `name=value` pair are skipped with a
/// debug log. Attribute names are matched case-insensitively; everything but
/// `Domain` is ignored.
pub(crate) fn cookies_from_headers(
    headers: &[(String, String)],
    request_host: &str,
) -> Vec<CookieRecord> {
    headers
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case(HEADER_SET_COOKIE))
        .filter_map(|(_, value)| {
            let parsed = parse_set_cookie(value, request_host);
            if parsed.is_none() {
                log::debug!("Ignoring malformed Set-Cookie header: {value}");
            }
            parsed
        })
        .collect()
}

/// Parses a single `Set-Cookie` header value.
pub(crate) fn parse_set_cookie(raw: &str, request_host: &str) -> Option<CookieRecord> {
    let mut parts = raw.split(';');
    let (name, value) = parts.next()?.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let domain = parts
        .filter_map(|attr| attr.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("domain"))
        .map(|(_, domain)| domain.trim().to_string())
        .filter(|domain| !domain.is_empty())
        .unwrap_or_else(|| request_host.to_string());

    Some(CookieRecord::new(name, value.trim().trim_matches('"'), domain))
}
