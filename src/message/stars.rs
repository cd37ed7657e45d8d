//! Star and pin metadata extraction.
//!
//! Best-effort: a history page with odd star markup still yields a message,
//! just with default metadata.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::utils::{element_text, parse_selector_with_fallback};

use super::profile::user_id_from_profile_href;

const STARS_SELECTOR_STR: &str = ".stars";
const STAR_COUNT_SELECTOR_STR: &str = ".times";
const PINNER_LINK_SELECTOR_STR: &str = "#content p a";

static STARS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(STARS_SELECTOR_STR, "star marker"));
static STAR_COUNT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(STAR_COUNT_SELECTOR_STR, "star count"));
static PINNER_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(PINNER_LINK_SELECTOR_STR, "pinner link"));

/// Star count and pin state read from a history page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarPin {
    /// Number of stars
    pub stars: u32,
    /// Whether the page shows the star/pin marker
    pub is_pinned: bool,
    /// Id of the pinning user, when the page names one
    pub pinner: Option<i64>,
}

/// Reads star and pin metadata from a history page.
///
/// - No `.stars` marker: zero stars, not pinned.
/// - Marker present: the count comes from `.times`; a bare star icon with no
///   number means one star. The pinner is read from the first profile link in
///   a `#content` paragraph and left unknown when absent or unparseable.
///
/// Never fails.
pub fn extract_star_pin(document: &Html) -> StarPin {
    if document.select(&STARS_SELECTOR).next().is_none() {
        return StarPin::default();
    }

    let count_text = document
        .select(&STAR_COUNT_SELECTOR)
        .next()
        .map(|times| element_text(&times).trim().to_string())
        .unwrap_or_default();
    let stars = parse_star_count(&count_text);

    let pinner = document
        .select(&PINNER_LINK_SELECTOR)
        .next()
        .and_then(|link| link.value().attr("href"))
        .and_then(user_id_from_profile_href);
    if pinner.is_none() {
        log::debug!("Star marker present but no parseable pinner link");
    }

    StarPin {
        stars,
        is_pinned: true,
        pinner,
    }
}

/// Star count shown next to the star icon; blank or non-numeric means one.
fn parse_star_count(text: &str) -> u32 {
    if text.is_empty() {
        return 1;
    }
    text.parse().unwrap_or_else(|_| {
        log::warn!("Unreadable star count '{text}', assuming 1");
        1
    })
}
