// HTTP module tests.

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
use reqwest::Method;

use super::{redirect_target, HttpClient, Request, Response};
use crate::config::Config;
use crate::cookies::{CookieJar, CookieRecord};
use crate::error_handling::ChatError;

fn test_client() -> HttpClient {
    HttpClient::new(&Config::default()).expect("default config should build a client")
}

fn client_with_hops(max_redirect_hops: usize) -> HttpClient {
    HttpClient::new(&Config {
        max_redirect_hops,
        ..Default::default()
    })
    .expect("config should build a client")
}

fn server_host(server: &Server) -> String {
    let url = url::Url::parse(&server.url("/").to_string()).expect("server url should parse");
    url.host_str().expect("server url has a host").to_string()
}

fn redirect(location: &str) -> Response {
    Response::from_parts(
        "https://host/start",
        302,
        vec![("Location".to_string(), location.to_string())],
        "",
    )
}

#[test]
fn test_redirect_target_relative_location() {
    assert_eq!(
        redirect_target(&redirect("/foo"), "https://host").unwrap(),
        "https://host/foo"
    );
}

#[test]
fn test_redirect_target_absolute_location() {
    assert_eq!(
        redirect_target(&redirect("https://other.example.com/login"), "https://host").unwrap(),
        "https://other.example.com/login"
    );
}

#[test]
fn test_redirect_target_keeps_query() {
    assert_eq!(
        redirect_target(&redirect("/rooms/1?tab=all"), "https://host").unwrap(),
        "https://host/rooms/1?tab=all"
    );
}

#[test]
fn test_redirect_target_two_locations_is_invalid() {
    let response = Response::from_parts(
        "https://host/start",
        302,
        vec![
            ("Location".to_string(), "/a".to_string()),
            ("location".to_string(), "/b".to_string()),
        ],
        "",
    );
    assert!(matches!(
        redirect_target(&response, "https://host"),
        Err(ChatError::InvalidRedirect { count: 2 })
    ));
}

#[test]
fn test_redirect_target_missing_location_is_invalid() {
    let response = Response::from_parts("https://host/start", 301, Vec::new(), "");
    assert!(matches!(
        redirect_target(&response, "https://host"),
        Err(ChatError::InvalidRedirect { count: 0 })
    ));
}

#[test]
fn test_response_collects_cookies_and_flags() {
    let response = Response::from_parts(
        "https://chat.example.com/x",
        200,
        vec![("set-cookie".to_string(), "fkey=1".to_string())],
        "ok",
    );
    assert!(response.is_success());
    assert!(!response.is_redirect());
    assert_eq!(response.cookies()[0].domain, "chat.example.com");
    assert!(redirect("/a").is_redirect());
}

#[test]
fn test_send_rejects_unsupported_verb() {
    let mut request = Request::new(Method::PUT, "https://chat.example.com/");
    assert!(matches!(
        test_client().send(&mut request),
        Err(ChatError::UnsupportedVerb(m)) if m == Method::PUT
    ));
    assert!(!request.is_sent());
}

#[test]
fn test_send_rejects_invalid_endpoints() {
    let client = test_client();
    for url in ["", "chat.example.com/rooms", "/relative", "ftp://chat.example.com/"] {
        let mut request = Request::get(url);
        assert!(
            matches!(client.send(&mut request), Err(ChatError::InvalidEndpoint(_))),
            "{url:?} should be rejected"
        );
    }
}

#[test]
fn test_send_twice_fails_with_already_sent() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ping"))
            .respond_with(status_code(200).body("pong")),
    );

    let client = test_client();
    let mut request = Request::get(server.url("/ping").to_string());
    let response = client.send(&mut request).unwrap();
    assert_eq!(response.body(), "pong");
    assert!(request.is_sent());

    assert!(matches!(
        client.send(&mut request),
        Err(ChatError::AlreadySent)
    ));
}

#[test]
fn test_send_attaches_matching_cookies_only() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/whoami"),
            request::headers(contains(("cookie", "acct=t1"))),
        ])
        .respond_with(status_code(200)),
    );

    let host = server_host(&server);
    let mut jar = CookieJar::from_records(vec![
        CookieRecord::new("acct", "t1", host.as_str()),
        CookieRecord::new("foreign", "x", "other.com"),
    ]);

    let client = test_client();
    let mut request = Request::get(server.url("/whoami").to_string()).with_jar(&mut jar);
    assert_eq!(client.send(&mut request).unwrap().status(), 200);
}

#[test]
fn test_send_merges_returned_cookies() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/login")).respond_with(
            status_code(200)
                .append_header("Set-Cookie", "fkey=abc; path=/")
                .append_header("Set-Cookie", "usr=1; path=/; HttpOnly"),
        ),
    );

    let mut jar = CookieJar::new();
    let client = test_client();
    client
        .get(&server.url("/login").to_string(), Some(&mut jar))
        .unwrap();

    let host = server_host(&server);
    let names: Vec<&str> = jar
        .cookies_for(&host)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["fkey", "usr"]);
}

#[test]
fn test_send_merges_exactly_the_response_cookies() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/login")).respond_with(
            status_code(200)
                .append_header("Set-Cookie", "no-equals-sign")
                .append_header("Set-Cookie", "acct=t1; path=/"),
        ),
    );

    let mut jar = CookieJar::new();
    let response = test_client()
        .get(&server.url("/login").to_string(), Some(&mut jar))
        .unwrap();

    assert_eq!(response.cookies().len(), 1);
    assert_eq!(jar.len(), 1);
    let stored: Vec<&CookieRecord> = jar.iter().collect();
    assert_eq!(stored[0], &response.cookies()[0]);
    assert_eq!(stored[0].domain, server_host(&server));
}

#[test]
fn test_post_sends_form_body() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/chats/1/messages/new"),
            request::body(url_decoded(contains(("text", "hello world")))),
        ])
        .respond_with(status_code(200).body("{\"id\":1}")),
    );

    let client = test_client();
    let mut request = Request::post(server.url("/chats/1/messages/new").to_string())
        .with_form([("text", "hello world"), ("fkey", "abc")]);
    assert_eq!(client.send(&mut request).unwrap().body(), "{\"id\":1}");
}

#[test]
fn test_post_redirect_is_followed_as_get_with_jar() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/users/login")).respond_with(
            status_code(302)
                .insert_header("Location", "/rooms")
                .insert_header("Set-Cookie", "acct=t2"),
        ),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/rooms"),
            request::headers(contains(("cookie", "acct=t2"))),
        ])
        .respond_with(status_code(200).body("rooms")),
    );

    let mut jar = CookieJar::new();
    let client = test_client();
    let mut request = Request::post(server.url("/users/login").to_string())
        .with_form([("email", "a@b.c")])
        .with_jar(&mut jar);
    let response = client.send(&mut request).unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.body(), "rooms");
    assert!(response.url().ends_with("/rooms"));
    assert_eq!(jar.len(), 1);
}

#[test]
fn test_redirect_chain_is_resolved() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/a"))
            .respond_with(status_code(301).insert_header("Location", "/b")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/b"))
            .respond_with(status_code(302).insert_header("Location", "/c")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/c"))
            .respond_with(status_code(200).body("done")),
    );

    let body = test_client()
        .get_text(&server.url("/a").to_string(), None)
        .unwrap();
    assert_eq!(body, "done");
}

#[test]
fn test_redirect_without_location_fails() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/moved"))
            .respond_with(status_code(302)),
    );

    assert!(matches!(
        test_client().get(&server.url("/moved").to_string(), None),
        Err(ChatError::InvalidRedirect { count: 0 })
    ));
}

#[test]
fn test_redirect_loop_is_bounded() {
    let server = Server::run();
    // initial request plus three hops
    server.expect(
        Expectation::matching(request::method_path("GET", "/loop"))
            .times(4)
            .respond_with(status_code(302).insert_header("Location", "/loop")),
    );

    assert!(matches!(
        client_with_hops(3).get(&server.url("/loop").to_string(), None),
        Err(ChatError::TooManyRedirects { max: 3 })
    ));
}

#[test]
fn test_non_redirect_error_status_is_returned() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .respond_with(status_code(404).body("not here")),
    );

    let response = test_client()
        .get(&server.url("/missing").to_string(), None)
        .unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(response.body(), "not here");
}
