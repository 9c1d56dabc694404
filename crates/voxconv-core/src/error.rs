//! Error types for a submission cycle.

use thiserror::Error;

/// Why a submission did not produce converted audio.
///
/// The display text of every variant is the bare message shown to the user;
/// the UI prefixes it with `Error: `.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The request could not complete (connection refused, dropped, CORS...).
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{detail}")]
    Server {
        /// HTTP status code of the reply.
        status: u16,
        /// Message taken from the reply's `detail` field, or the fallback.
        detail: String,
    },

    /// The reply body could not be read as the expected JSON.
    #[error("{0}")]
    MalformedResponse(String),
}

/// Coarse category of a [`ConversionError`], used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was received.
    Network,
    /// A response with a failure status was received.
    Server,
    /// A response was received but could not be understood.
    MalformedResponse,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Server => write!(f, "server"),
            Self::MalformedResponse => write!(f, "malformed-response"),
        }
    }
}

impl ConversionError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Server { .. } => ErrorKind::Server,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// HTTP status of the failed reply, when one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
