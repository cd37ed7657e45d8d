//! CSS selector and element text helpers.

use scraper::{ElementRef, Selector};

/// Selector that can never match, used when a selector string fails to parse.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector, falling back to one that matches nothing.
///
/// A selector that fails to parse is logged and treated as "element absent",
/// so a bad selector degrades the same way a page missing the element does.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - What the selector is for, used in the error log
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' for {}: {}. Nothing will match.",
            selector_str,
            context,
            e
        );
        Selector::parse(MATCH_NOTHING)
            .expect("fallback selector '*:not(*)' always parses")
    })
}

/// Concatenated text content of `element` and its descendants.
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// First descendant of `element` matching `selector`.
pub fn first_match<'a>(element: &ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let selector = parse_selector_with_fallback("div[", "test");
        let document = Html::parse_document("<div>a</div>");
        assert_eq!(document.select(&selector).count(), 0);
    }

    #[test]
    fn test_element_text_joins_descendants() {
        let document = Html::parse_fragment("<p>Hello <b>big</b> world</p>");
        let p = parse_selector_with_fallback("p", "test");
        let element = document.select(&p).next().unwrap();
        assert_eq!(element_text(&element), "Hello big world");
    }

    #[test]
    fn test_first_match_returns_first_descendant() {
        let document = Html::parse_fragment(r#"<div><a href="/1">one</a><a href="/2">two</a></div>"#);
        let div = parse_selector_with_fallback("div", "test");
        let a = parse_selector_with_fallback("a", "test");
        let element = document.select(&div).next().unwrap();
        let first = first_match(&element, &a).unwrap();
        assert_eq!(first.value().attr("href"), Some("/1"));
        assert!(first_match(&element, &parse_selector_with_fallback("span", "test")).is_none());
    }
}
