//! Error handling module for the portal client.
//!
//! Provides a small set of error kinds covering local validation and every
//! remote failure mode. Errors are caught at the page boundary and turned into
//! user-facing notifications; none of them is fatal to the session.

use std::fmt;

/// Error kind names for diagnostics, to avoid stringly-typed errors.
pub mod kinds {
    pub const VALIDATION: &str = "VALIDATION";
    pub const NETWORK: &str = "NETWORK";
    pub const SERVER: &str = "SERVER";
    pub const NOT_FOUND: &str = "NOT_FOUND";
}

/// Client error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required field is missing; the request never left the client.
    Validation(String),
    /// The backend was unreachable or the transport failed mid-flight.
    Network(String),
    /// The backend answered with a non-success HTTP status.
    Server { status: u16, message: String },
    /// The addressed record does not exist on the backend.
    NotFound(String),
}

impl ApiError {
    /// Get the kind name for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => kinds::VALIDATION,
            ApiError::Network(_) => kinds::NETWORK,
            ApiError::Server { .. } => kinds::SERVER,
            ApiError::NotFound(_) => kinds::NOT_FOUND,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Network(msg) => msg.clone(),
            ApiError::Server { status, message } => format!("HTTP {}: {}", status, message),
            ApiError::NotFound(msg) => msg.clone(),
        }
    }

}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Transport error: {:?}", err);
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "SERVER: HTTP 500: boom");
        assert_eq!(err.kind(), kinds::SERVER);
    }

    #[test]
    fn test_network_from_reqwest_kind() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.kind(), kinds::NETWORK);
    }
}
