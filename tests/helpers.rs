// Shared test helpers for mock chat servers and history page fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use chat_history::{Config, HttpClient, UrlScheme};
use httptest::Server;

/// Builds a client that renders message endpoints over plain HTTP, so they
/// reach the local mock server.
#[allow(dead_code)] // Used by other test files
pub fn local_client() -> HttpClient {
    HttpClient::new(&Config {
        scheme: UrlScheme::Http,
        ..Default::default()
    })
    .expect("Failed to build test client")
}

/// Host (with port) of the mock server, as passed to message functions.
#[allow(dead_code)]
pub fn server_host(server: &Server) -> String {
    server.addr().to_string()
}

/// Domain the client sees for the mock server, for seeding cookies.
#[allow(dead_code)]
pub fn cookie_domain(server: &Server) -> String {
    let url = url::Url::parse(&server.url("/").to_string()).expect("Server URL should parse");
    url.host_str().expect("Server URL has a host").to_string()
}

/// One revision block as rendered on the history page.
#[allow(dead_code)]
pub fn revision_block(text: &str, author_id: i64, author_name: &str, timestamp: &str) -> String {
    format!(
        r#"<div class="monologue">
            <div class="signature"><a href="/users/{author_id}/{author_name}">{author_name}</a></div>
            <div class="messages">
                <div class="timestamp">{timestamp}</div>
                <div class="message-source">{text}</div>
            </div>
        </div>"#
    )
}

/// A history page with `blocks` (newest first) and optional star/pin markup.
#[allow(dead_code)]
pub fn history_page(star_markup: &str, blocks: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><body>
        <div id="content">
            <h2>Message</h2>
            {star_markup}
            <h2>History</h2>
            {}
        </div>
        </body></html>"#,
        blocks.join("\n")
    )
}
