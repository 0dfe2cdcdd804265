use std::backtrace::Backtrace;
use std::fmt;

/// Errors originating from route handlers or the rendering layer.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Unauthorized(String),
    RenderError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            ServerError::RenderError(msg) => write!(f, "Render Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

/// A caught error on its way out of the runtime: the cause plus the
/// flags and trace the error responder needs.
///
/// `unhandled` marks errors that escaped user code; `fatal` marks
/// unrecoverable ones. Either flag makes the responder log the error.
#[derive(Debug)]
pub struct RequestError {
    pub cause: ServerError,
    pub unhandled: bool,
    pub fatal: bool,
    /// Display lines of the captured trace, outermost frame first.
    pub trace: Vec<String>,
}

impl RequestError {
    /// Wrap a cause, capturing the trace at the point of construction.
    pub fn new(cause: ServerError) -> Self {
        Self {
            cause,
            unhandled: false,
            fatal: false,
            trace: capture_trace(),
        }
    }

    pub fn unhandled(mut self) -> Self {
        self.unhandled = true;
        self
    }

    pub fn fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    /// Replace the captured trace with explicit lines.
    pub fn with_trace(mut self, lines: Vec<String>) -> Self {
        self.trace = lines;
        self
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cause.fmt(f)
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

impl From<ServerError> for RequestError {
    fn from(cause: ServerError) -> Self {
        RequestError::new(cause)
    }
}

fn capture_trace() -> Vec<String> {
    let backtrace = Backtrace::force_capture();
    backtrace
        .to_string()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
