use thiserror::Error;

pub const UNAUTHORIZED_MESSAGE: &str = "Your session has expired. Redirecting to login...";
pub const SERVER_FAULT_MESSAGE: &str = "Server error. Please try again later.";
pub const CONNECTIVITY_MESSAGE: &str = "Unable to reach the server. Please check your connection.";
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Why a request to the placement API did not produce usable data.
///
/// `Display` yields the roster screen's text for each kind. Every variant
/// that came with a response also keeps the server's own `message`, which
/// the applications screen shows instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// HTTP 401: the session is gone and the user must log in again.
    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized(Option<String>),
    /// HTTP 500.
    #[error("{}", SERVER_FAULT_MESSAGE)]
    ServerFault(Option<String>),
    /// No response was received at all. Carries the transport's own text for logs.
    #[error("{}", CONNECTIVITY_MESSAGE)]
    Connectivity(String),
    /// Any other failure, with the server's `message` when it sent one.
    #[error("{}", server_text(.0))]
    Unspecified(Option<String>),
}

fn server_text(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or(GENERIC_MESSAGE)
}

impl FetchError {
    /// Classifies a response that arrived with a non-success status.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        match status {
            401 => FetchError::Unauthorized(message),
            500 => FetchError::ServerFault(message),
            _ => FetchError::Unspecified(message),
        }
    }

    /// Failure reported in the body of an otherwise successful response.
    pub fn rejected(message: Option<String>) -> Self {
        FetchError::Unspecified(message.filter(|m| !m.trim().is_empty()))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FetchError::Unauthorized(_))
    }

    /// The `message` the server attached, if a response arrived with one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            FetchError::Unauthorized(message)
            | FetchError::ServerFault(message)
            | FetchError::Unspecified(message) => message.as_deref(),
            FetchError::Connectivity(_) => None,
        }
    }

    /// The server's message, or `fallback` when it sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}
