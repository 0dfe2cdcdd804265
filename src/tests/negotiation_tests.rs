use crate::negotiation::wants_json;
use astra::{Body, Request};
use http::header::{ACCEPT, USER_AGENT};
use http::HeaderValue;

fn request(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = path.parse().unwrap();
    req
}

#[test]
fn accept_header_selects_json() {
    let mut req = request("/some/page");
    req.headers_mut()
        .insert(ACCEPT, HeaderValue::from_static("application/json"));
    assert!(wants_json(&req));
}

#[test]
fn browser_accept_selects_html() {
    let mut req = request("/some/page");
    req.headers_mut().insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );
    assert!(!wants_json(&req));
}

#[test]
fn curl_user_agent_selects_json() {
    let mut req = request("/some/page");
    req.headers_mut()
        .insert(USER_AGENT, HeaderValue::from_static("curl/8.5.0"));
    assert!(wants_json(&req));
}

#[test]
fn cors_fetch_selects_json() {
    let mut req = request("/some/page");
    req.headers_mut()
        .insert("sec-fetch-mode", HeaderValue::from_static("cors"));
    assert!(wants_json(&req));
}

#[test]
fn api_prefix_selects_json() {
    assert!(wants_json(&request("/api/users")));
}

#[test]
fn json_suffix_selects_json() {
    assert!(wants_json(&request("/data.json")));
}

#[test]
fn bare_request_defaults_to_html() {
    assert!(!wants_json(&request("/some/page")));
}
