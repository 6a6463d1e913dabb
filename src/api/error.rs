//! API Error Types
//!
//! One error type for every gateway operation. Errors are converted to
//! user-visible text at the call site and are never fatal.

use thiserror::Error;

/// Failure modes of a gateway call.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the credentials or the bearer token.
    #[error("authentication failed")]
    Unauthorized,

    /// The server answered with a non-success status and this message.
    #[error("{0}")]
    Server(String),

    /// The response body could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_displays_verbatim() {
        let err = ApiError::Server("title must not be empty".to_string());
        assert_eq!(err.to_string(), "title must not be empty");
    }

    #[test]
    fn unauthorized_has_stable_message() {
        assert_eq!(ApiError::Unauthorized.to_string(), "authentication failed");
    }
}
