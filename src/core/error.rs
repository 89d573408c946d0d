//! Error types for the auth client.
//!
//! Only [`AuthError::InvalidArgument`] is ever returned synchronously from an
//! operation call. Every other variant reaches the caller through the
//! resolution of a [`ClientFuture`](crate::rpc::ClientFuture).

use thiserror::Error;
use tonic::{Code, Status};

/// Auth client error conditions.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required operation input was missing. No RPC was issued.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The remote call failed; the original status is preserved unchanged.
    #[error("rpc failed: {0}")]
    Rpc(Status),

    /// A nominally successful response could not be translated.
    #[error("failed to translate response: {message}")]
    Translation { message: String },

    /// The caller cancelled the call before it completed.
    #[error("call cancelled")]
    Cancelled,

    /// The transport stub could not be constructed.
    #[error("transport error: {message}")]
    Transport { message: String },
}

impl AuthError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a Translation error.
    pub fn translation(message: impl Into<String>) -> Self {
        Self::Translation {
            message: message.into(),
        }
    }

    /// The RPC status carried by this error, if it came from the server.
    pub fn status(&self) -> Option<&Status> {
        match self {
            Self::Rpc(status) => Some(status),
            _ => None,
        }
    }

    /// gRPC code equivalent of this error.
    pub fn code(&self) -> Code {
        match self {
            Self::InvalidArgument { .. } => Code::InvalidArgument,
            Self::Rpc(status) => status.code(),
            Self::Translation { .. } => Code::Internal,
            Self::Cancelled => Code::Cancelled,
            Self::Transport { .. } => Code::Unavailable,
        }
    }

    /// Check if a caller-side retry could plausibly succeed.
    ///
    /// Nothing in this crate retries; the flag exists for callers that
    /// layer their own policy on top.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::Rpc(status)
                if matches!(status.code(), Code::Unavailable | Code::DeadlineExceeded)
        )
    }
}

impl From<Status> for AuthError {
    fn from(status: Status) -> Self {
        Self::Rpc(status)
    }
}

/// Result type using AuthError.
pub type AuthResult<T> = Result<T, AuthError>;

/// Unwrap a required operation input or fail with InvalidArgument.
pub fn require<T>(value: Option<T>, name: &str) -> AuthResult<T> {
    value.ok_or_else(|| AuthError::invalid_argument(format!("{} can't be null", name)))
}
