//! The kinds of OAuth token failure and their fixed messages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Message for [`TokenErrorKind::Unauthorized`].
///
/// The spelling is kept as-is so existing log searches keep matching.
pub const UNAUTHORIZED_MESSAGE: &str = "please encure client id has access";

/// Message for [`TokenErrorKind::InvalidSecret`].
pub const INVALID_SECRET_MESSAGE: &str = "secret is invalid";

/// Message for [`TokenErrorKind::InvalidTenant`].
pub const INVALID_TENANT_MESSAGE: &str = "Tenant id is invalid";

/// Which token failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenErrorKind {
    /// The client id is not allowed to request a token.
    Unauthorized,
    /// The client secret was rejected.
    InvalidSecret,
    /// The tenant id does not exist or is malformed.
    InvalidTenant,
}

impl TokenErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenErrorKind; 3] = [
        TokenErrorKind::Unauthorized,
        TokenErrorKind::InvalidSecret,
        TokenErrorKind::InvalidTenant,
    ];

    /// The fixed human-readable message for this kind.
    pub const fn message(self) -> &'static str {
        match self {
            TokenErrorKind::Unauthorized => UNAUTHORIZED_MESSAGE,
            TokenErrorKind::InvalidSecret => INVALID_SECRET_MESSAGE,
            TokenErrorKind::InvalidTenant => INVALID_TENANT_MESSAGE,
        }
    }

    /// Stable snake_case name, matching the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenErrorKind::Unauthorized => "unauthorized",
            TokenErrorKind::InvalidSecret => "invalid_secret",
            TokenErrorKind::InvalidTenant => "invalid_tenant",
        }
    }
}

/// Look up the message for `kind` without constructing an error.
pub const fn message_for(kind: TokenErrorKind) -> &'static str {
    kind.message()
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`TokenErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token error kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for TokenErrorKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenErrorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
