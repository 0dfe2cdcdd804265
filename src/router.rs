use crate::errors::{RequestError, ServerError};
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates;
use astra::Request;
use serde::Serialize;

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

pub fn handle(req: Request) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page()),

        ("GET", "/api/health") => json_response(&Health { status: "ok" }),

        // Deliberate crash route, kept for exercising the error path.
        ("GET", "/boom") => Err(RequestError::new(ServerError::InternalError).unhandled()),

        _ => Err(RequestError::new(ServerError::NotFound)),
    }
}
