use crate::errors::{RequestError, ServerError};

/// One displayable line of a stack trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackLine {
    pub text: String,
}

/// The structured form of a caught error: status, messages, trace.
/// Every field is populated; the stack may be empty.
#[derive(Debug, Clone)]
pub struct NormalizedError {
    pub status_code: u16,
    pub status_message: Option<String>,
    pub message: String,
    pub stack: Vec<StackLine>,
}

/// Classify a caught error into its outward-facing shape. Never fails:
/// every cause maps to a status code and a message.
pub fn normalize(error: &RequestError) -> NormalizedError {
    let (status_code, status_message) = match &error.cause {
        ServerError::NotFound => (404, Some("Not Found")),
        ServerError::BadRequest(_) => (400, Some("Bad Request")),
        ServerError::Unauthorized(_) => (401, Some("Unauthorized")),
        ServerError::RenderError(_) => (500, Some("Render Error")),
        ServerError::InternalError => (500, None),
    };

    NormalizedError {
        status_code,
        status_message: status_message.map(String::from),
        message: error.cause.to_string(),
        stack: error
            .trace
            .iter()
            .map(|line| StackLine { text: line.clone() })
            .collect(),
    }
}
