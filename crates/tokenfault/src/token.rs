//! OAuth token failures.
//!
//! Building an [`OAuthTokenError`] is the point of diagnosis: every
//! constructor writes the kind's message to a [`DiagnosticSink`] exactly
//! once, then hands back an immutable value for the caller to propagate.

use std::fmt;

use crate::error::Error;
use crate::kind::TokenErrorKind;
use crate::sink::{DiagnosticSink, TracingSink};

/// A refused token request, tagged with why.
///
/// `Clone` copies the value without logging again.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OAuthTokenError {
    kind: TokenErrorKind,
}

impl OAuthTokenError {
    /// Construct an error of `kind`, logging its message through tracing.
    pub fn new(kind: TokenErrorKind) -> Self {
        Self::new_with(kind, &TracingSink)
    }

    /// Construct an error of `kind`, logging its message to `sink`.
    pub fn new_with(kind: TokenErrorKind, sink: &dyn DiagnosticSink) -> Self {
        Error::log_exception_to(sink, kind.message());
        Self { kind }
    }

    /// The client id does not have access.
    pub fn unauthorized_client() -> Self {
        Self::new(TokenErrorKind::Unauthorized)
    }

    /// The client secret was rejected.
    pub fn invalid_secret() -> Self {
        Self::new(TokenErrorKind::InvalidSecret)
    }

    /// The tenant id was rejected.
    pub fn invalid_tenant() -> Self {
        Self::new(TokenErrorKind::InvalidTenant)
    }

    /// Which failure this is.
    pub fn kind(&self) -> TokenErrorKind {
        self.kind
    }

    /// The kind's fixed message.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Check whether this error is of `kind`.
    pub fn is(&self, kind: TokenErrorKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for OAuthTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthTokenError")
            .field("kind", &self.kind)
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for OAuthTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for OAuthTokenError {}

/// Fail with a token error of `kind`.
///
/// Always returns `Err`; use as `return raise(kind);` or `raise(kind)?`.
pub fn raise<T>(kind: TokenErrorKind) -> Result<T, OAuthTokenError> {
    Err(OAuthTokenError::new(kind))
}

/// [`raise`] with an injected sink.
pub fn raise_with<T>(
    kind: TokenErrorKind,
    sink: &dyn DiagnosticSink,
) -> Result<T, OAuthTokenError> {
    Err(OAuthTokenError::new_with(kind, sink))
}
