use crate::errors::{RequestError, ServerError};
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body = serde_json::to_string(value).map_err(|e| {
        RequestError::new(ServerError::RenderError(format!("JSON encoding failed: {e}")))
    })?;

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}
