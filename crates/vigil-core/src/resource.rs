//! Resource envelopes and request-lifecycle state
//!
//! Every network failure, regardless of origin (unreachable host,
//! failure status, undecodable body), is normalized to the single
//! [`ApiError`] envelope before it reaches a caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Code assigned when a failure has no server-assigned code
pub const TRANSPORT_ERROR_CODE: u16 = 500;

/// Normalized failure envelope
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Always false; carried for wire fidelity
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: Option<u16>) -> Self {
        ApiError {
            success: false,
            error: error.into(),
            code,
        }
    }

    /// Normalize a transport-level failure (network, decode)
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::new(message, Some(TRANSPORT_ERROR_CODE))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "api error ({code}): {}", self.error),
            None => write!(f, "api error: {}", self.error),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result type for resource calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Request-lifecycle snapshot: `idle -> loading -> success | error`.
///
/// At most one of `data`/`error` is set at any settled point. While
/// `loading` is true the previous data is retained, not cleared - it is
/// being superseded by the attempt in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct AsyncState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> AsyncState<T> {
    /// The state before any call has been issued
    pub fn idle() -> Self {
        AsyncState {
            data: None,
            loading: false,
            error: None,
        }
    }

    /// Whether no attempt is currently in flight
    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}

impl<T> Default for AsyncState<T> {
    fn default() -> Self {
        AsyncState::idle()
    }
}
