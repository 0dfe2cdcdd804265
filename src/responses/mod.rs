pub mod errors;
pub mod html;
pub mod json;

use crate::errors::RequestError;
use astra::Response;

// Type alias used by route handlers.
pub type ResultResp = Result<Response, RequestError>;

pub use errors::{dispatch, respond, ErrorObject, RequestContext, StatusMessage};
pub use html::html_response;
pub use json::json_response;
