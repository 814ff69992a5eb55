//! Typed OAuth token failures that log on construction.
//!
//! A refused token request is one of three kinds: the client is not
//! authorized, the secret is invalid, or the tenant is invalid. Each kind
//! has a fixed message, and building the error writes that message at
//! debug level exactly once.
//!
//! # Components
//!
//! - [`kind`] — the kinds and their message table
//! - [`token`] — `OAuthTokenError` and `raise`
//! - [`error`] — crate-wide `Error` category and its logging hook
//! - [`sink`] — injectable logger handles (tracing, in-memory, closures)
//! - [`response`] — mapping token endpoint error bodies onto kinds

pub mod error;
pub mod kind;
pub mod response;
pub mod sink;
pub mod token;

pub use error::{Error, Result};
pub use kind::{TokenErrorKind, UnknownKind, message_for};
pub use response::{TokenErrorResponse, classify_error_code};
pub use sink::{BufferSink, DiagnosticSink, TracingSink};
pub use token::{OAuthTokenError, raise, raise_with};
