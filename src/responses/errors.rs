use crate::config::RuntimeMode;
use crate::errors::RequestError;
use crate::normalize::{normalize, NormalizedError};
use crate::templates::render_html_error;
use astra::{Body, Request, Response, ResponseBuilder};
use serde::Serialize;

use super::ResultResp;

/// Snapshot of the request facts the error responder needs, taken
/// before the router consumes the request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Path and query as received; empty when unavailable.
    pub url: String,
    pub wants_json: bool,
}

impl RequestContext {
    pub fn from_request(req: &Request) -> Self {
        Self {
            url: req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_default(),
            wants_json: crate::negotiation::wants_json(req),
        }
    }
}

/// The outward-facing error body. Serializes with the wire keys
/// `url`, `statusCode`, `statusMessage`, `message`, `stack`; the two
/// optional fields are omitted entirely when `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorObject {
    pub url: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<String>>,
}

/// Reason phrase for the status line, carried as a response extension
/// since `http` responses have no reason-phrase slot of their own.
/// Only present when the normalized error had a non-empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage(pub String);

/// Terminal error handler: turns any caught error into a complete
/// JSON or HTML response. Infallible; this is the last stop, so
/// failures upstream of it are masked by defaults rather than raised.
pub fn respond(error: &RequestError, ctx: &RequestContext, mode: RuntimeMode) -> Response {
    let normalized = normalize(error);

    let show_details = show_details(mode, normalized.status_code);
    let error_object = build_error_object(&normalized, ctx, show_details);

    // Console output. Always carries the full trace, independent of
    // what the response body exposes.
    if error.unhandled || error.fatal {
        eprintln!("{}", format_log_line(error, &normalized));
    }

    let mut builder = ResponseBuilder::new().status(normalized.status_code);
    if let Some(msg) = normalized.status_message.as_deref().filter(|m| !m.is_empty()) {
        builder = builder.extension(StatusMessage(msg.to_string()));
    }

    if ctx.wants_json {
        let body = serde_json::to_string(&error_object).unwrap_or_else(|_| String::from("{}"));
        builder
            .header("Content-Type", mime::APPLICATION_JSON.as_ref())
            .body(Body::from(body))
            .unwrap()
    } else {
        builder
            .header("Content-Type", mime::TEXT_HTML.as_ref())
            .body(Body::from(render_html_error(&error_object)))
            .unwrap()
    }
}

/// Stack traces go out only in development mode, and never on a 404;
/// "not found" pages stay uncluttered even while developing.
pub fn show_details(mode: RuntimeMode, status_code: u16) -> bool {
    mode.is_development() && status_code != 404
}

pub fn build_error_object(
    normalized: &NormalizedError,
    ctx: &RequestContext,
    show_details: bool,
) -> ErrorObject {
    ErrorObject {
        url: ctx.url.clone(),
        status_code: normalized.status_code,
        status_message: normalized.status_message.clone(),
        message: normalized.message.clone(),
        // None means the field is absent outright, not an empty list.
        stack: if show_details {
            Some(normalized.stack.iter().map(|line| line.text.clone()).collect())
        } else {
            None
        },
    }
}

/// One diagnostic line for unhandled/fatal errors: tags, message, and
/// every trace line indented by two spaces.
pub fn format_log_line(error: &RequestError, normalized: &NormalizedError) -> String {
    let mut tags = vec!["[nitro]", "[request error]"];
    if error.unhandled {
        tags.push("[unhandled]");
    }
    if error.fatal {
        tags.push("[fatal]");
    }

    let trace = normalized
        .stack
        .iter()
        .map(|line| format!("  {}", line.text))
        .collect::<Vec<_>>()
        .join("  \n");

    format!("{} {}\n{}", tags.join(" "), normalized.message, trace)
}

/// Convenience for the serve loop: snapshot the context, run the
/// handler, and route any error through the responder.
pub fn dispatch<F>(req: Request, mode: RuntimeMode, handler: F) -> Response
where
    F: FnOnce(Request) -> ResultResp,
{
    let ctx = RequestContext::from_request(&req);
    match handler(req) {
        Ok(resp) => resp,
        Err(err) => respond(&err, &ctx, mode),
    }
}
