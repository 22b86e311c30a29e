use thiserror::Error;

/// Failure raised by a market-data backend read.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {endpoint} failed: {message}")]
    Http { endpoint: String, message: String },
    #[error("upstream status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },
    #[error("could not decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

/// Shape problems in a market listing payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("Error: Invalid response format from API")]
    InvalidFormat,
    #[error("Error: Unexpected response format from API")]
    UnexpectedFormat,
}

/// Every way a tool call can end without a formatted payload.
///
/// `Display` is the exact text handed back to the caller.
#[derive(Debug, Error)]
pub enum Fault {
    #[error("Missing arguments for the request")]
    MissingArguments,
    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),
    #[error("Error executing tool: invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error(transparent)]
    MalformedResponse(#[from] ListingError),
    #[error("Error executing tool: {0}")]
    Backend(#[from] BackendError),
}

impl Fault {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Fault::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Fault::MissingArguments => "missing_arguments",
            Fault::MissingParameter(_) => "missing_parameter",
            Fault::InvalidParameter { .. } => "invalid_parameter",
            Fault::UnknownTool(_) => "unknown_tool",
            Fault::MalformedResponse(_) => "malformed_response",
            Fault::Backend(_) => "backend",
        }
    }
}
