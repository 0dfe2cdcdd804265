use crate::errors::{RequestError, ServerError};
use crate::normalize::normalize;

#[test]
fn not_found_maps_to_404_with_reason() {
    let err = RequestError::new(ServerError::NotFound);
    let normalized = normalize(&err);

    assert_eq!(normalized.status_code, 404);
    assert_eq!(normalized.status_message.as_deref(), Some("Not Found"));
    assert_eq!(normalized.message, "Not Found");
}

#[test]
fn bad_request_keeps_handler_message() {
    let err = RequestError::new(ServerError::BadRequest("missing field `id`".into()));
    let normalized = normalize(&err);

    assert_eq!(normalized.status_code, 400);
    assert_eq!(normalized.status_message.as_deref(), Some("Bad Request"));
    assert_eq!(normalized.message, "Bad Request: missing field `id`");
}

#[test]
fn internal_error_has_no_reason_phrase() {
    let err = RequestError::new(ServerError::InternalError);
    let normalized = normalize(&err);

    assert_eq!(normalized.status_code, 500);
    assert_eq!(normalized.status_message, None);
    assert_eq!(normalized.message, "Internal Server Error");
}

#[test]
fn trace_lines_carry_over_in_order() {
    let err = RequestError::new(ServerError::InternalError)
        .with_trace(vec!["at handler".into(), "at serve".into()]);
    let normalized = normalize(&err);

    let texts: Vec<&str> = normalized.stack.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["at handler", "at serve"]);
}

#[test]
fn constructor_captures_a_trace() {
    let err = RequestError::new(ServerError::InternalError);
    assert!(!err.trace.is_empty());
    assert!(err.trace.iter().all(|line| !line.is_empty()));
}
