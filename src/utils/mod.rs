//! Utility functions shared by the HTML extractors.

mod selector;

pub use selector::{element_text, first_match, parse_selector_with_fallback};
