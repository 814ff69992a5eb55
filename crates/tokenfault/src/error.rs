//! Application-level error category.

use crate::kind::TokenErrorKind;
use crate::sink::{DiagnosticSink, TracingSink};
use crate::token::OAuthTokenError;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Token issuance was refused.
    #[error(transparent)]
    OAuthToken(#[from] OAuthTokenError),

    /// A token endpoint error body could not be read.
    #[error("Malformed token error response: {reason}")]
    MalformedResponse { reason: String },
}

impl Error {
    /// Logging hook shared by every error in the category.
    ///
    /// Writes `message` at debug level through the default tracing sink.
    pub fn log_exception(message: &str) {
        Self::log_exception_to(&TracingSink, message);
    }

    /// Same as [`Error::log_exception`], through an injected sink.
    pub fn log_exception_to(sink: &dyn DiagnosticSink, message: &str) {
        sink.debug(message);
    }

    /// The token failure kind, if this is a token failure.
    pub fn token_kind(&self) -> Option<TokenErrorKind> {
        match self {
            Error::OAuthToken(e) => Some(e.kind()),
            Error::MalformedResponse { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedResponse {
            reason: e.to_string(),
        }
    }
}
