//! Shared error type across cuberoot crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or malformed request input.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CubeRootError>;

/// Unified error type used by core and server.
///
/// The `Display` output of the request-path variants is sent verbatim as the
/// plain-text response body, so keep it stable.
#[derive(Debug, Error)]
pub enum CubeRootError {
    #[error("Missing parameter 'd'")]
    MissingParameter,
    #[error("Invalid parameter 'd': {0}")]
    InvalidParameter(String),
    #[error("encoding failed: {0}")]
    Encoding(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl CubeRootError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CubeRootError::MissingParameter | CubeRootError::InvalidParameter(_) => {
                ClientCode::BadRequest
            }
            CubeRootError::Encoding(_) | CubeRootError::InvalidConfig(_) => ClientCode::Internal,
        }
    }
}
