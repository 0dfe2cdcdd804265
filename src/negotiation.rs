use astra::Request;

/// Decide whether the requester wants a JSON body rather than HTML.
///
/// Matches on the `Accept` header, well-known CLI user agents, CORS
/// fetches, and JSON-looking paths. Anything else gets HTML.
pub fn wants_json(req: &Request) -> bool {
    let path = req.uri().path();

    header_contains(req, "accept", mime::APPLICATION_JSON.as_ref())
        || header_contains(req, "user-agent", "curl/")
        || header_contains(req, "user-agent", "HTTPie/")
        || header_contains(req, "sec-fetch-mode", "cors")
        || path.starts_with("/api/")
        || path.ends_with(".json")
}

fn header_contains(req: &Request, name: &str, needle: &str) -> bool {
    req.headers()
        .get(name)
        .and_then(|val| val.to_str().ok())
        .is_some_and(|val| val.contains(needle))
}
