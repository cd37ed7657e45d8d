//! Cookie record and jar types.

use serde::Serialize;

/// One server-issued cookie, scoped to a domain.
///
/// Only name, value and domain are tracked; expiry, path and the secure flag
/// are ignored and a stored cookie stays valid for the life of its jar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookieRecord {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Domain the cookie is scoped to, possibly with a leading `.`
    pub domain: String,
}

impl CookieRecord {
    /// Creates a cookie record.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
        }
    }

    /// Returns true if this cookie should be sent to `host`.
    ///
    /// The domain, minus one leading `.`, must be a suffix of the host, so
    /// `.example.com` matches both `chat.example.com` and `example.com`.
    pub fn matches_host(&self, host: &str) -> bool {
        let domain = self.domain.strip_prefix('.').unwrap_or(&self.domain);
        host.to_ascii_lowercase()
            .ends_with(&domain.to_ascii_lowercase())
    }
}

/// In-memory, domain-scoped cookie store for one chat session.
///
/// Holds at most one record per `(name, domain)` pair; a later capture
/// replaces an earlier one in place. The jar has no internal locking and
/// belongs to a single session owner.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    records: Vec<CookieRecord>,
}

impl CookieJar {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a jar from an existing cookie set, such as the output of a
    /// login flow.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CookieRecord>,
    {
        let mut jar = Self::new();
        jar.add_records(records);
        jar
    }

    /// Stores a cookie, replacing any record with the same name and domain.
    pub fn add(&mut self, record: CookieRecord) {
        match self
            .records
            .iter_mut()
            .find(|r| r.name == record.name && r.domain.eq_ignore_ascii_case(&record.domain))
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Stores every cookie in `records`, in order.
    pub fn add_records<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = CookieRecord>,
    {
        for record in records {
            self.add(record);
        }
    }

    /// Merges the cookies issued by a response.
    ///
    /// `headers` is the response's ordered header list; every `Set-Cookie`
    /// entry is parsed, and cookies without a `Domain` attribute are scoped to
    /// `request_host`.
    pub fn add_from_response(&mut self, headers: &[(String, String)], request_host: &str) {
        let captured = super::parse::cookies_from_headers(headers, request_host);
        if !captured.is_empty() {
            log::debug!(
                "Captured {} cookie(s) from {}",
                captured.len(),
                request_host
            );
        }
        self.add_records(captured);
    }

    /// Returns the cookies that should be sent to `host`.
    pub fn cookies_for(&self, host: &str) -> Vec<&CookieRecord> {
        self.records.iter().filter(|r| r.matches_host(host)).collect()
    }

    /// Renders the `Cookie` request header value for `host`, if any cookie
    /// matches.
    pub fn header_for(&self, host: &str) -> Option<String> {
        let matching = self.cookies_for(host);
        if matching.is_empty() {
            return None;
        }
        Some(
            matching
                .iter()
                .map(|c| format!("{}={}", c.name, c.value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Iterates over every stored cookie.
    pub fn iter(&self) -> impl Iterator<Item = &CookieRecord> {
        self.records.iter()
    }

    /// Number of stored cookies.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the jar holds no cookies.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
