//! Profile link parsing.
//!
//! The chat site links users as `/users/{id}/{slug}`. The id is read by
//! position: it is the third `/`-delimited segment of the href (the first is
//! the empty string before the leading slash). Absolute hrefs or any other
//! URL layout will not parse, which is why every caller goes through this
//! one helper.

/// Position of the user id among the `/`-delimited href segments.
const PROFILE_ID_SEGMENT: usize = 2;

/// Extracts the user id from a profile href such as `/users/1234/jon-skeet`.
///
/// Returns `None` when the segment is missing or not an integer. Ids may be
/// negative (the site uses negative ids for feeds and system users).
pub fn user_id_from_profile_href(href: &str) -> Option<i64> {
    href.split('/')
        .nth(PROFILE_ID_SEGMENT)?
        .trim()
        .parse::<i64>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_profile_href() {
        assert_eq!(user_id_from_profile_href("/users/1234/jon-skeet"), Some(1234));
        assert_eq!(user_id_from_profile_href("/users/7"), Some(7));
        assert_eq!(user_id_from_profile_href("/users/-2/feeds"), Some(-2));
    }

    #[test]
    fn test_user_id_from_profile_href_rejects_other_shapes() {
        assert_eq!(user_id_from_profile_href(""), None);
        assert_eq!(user_id_from_profile_href("/users"), None);
        assert_eq!(user_id_from_profile_href("/users/abc/name"), None);
        // host lands in the id position for absolute links
        assert_eq!(
            user_id_from_profile_href("https://chat.example.com/users/1/x"),
            None
        );
    }
}
