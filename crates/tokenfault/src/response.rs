//! Classification of token endpoint error bodies.
//!
//! Token endpoints answer a refused request with an RFC 6749 §5.2 body:
//!
//! ```json
//! { "error": "invalid_client", "error_description": "..." }
//! ```
//!
//! The Microsoft identity platform adds numeric `error_codes` (the `AADSTS`
//! codes) that say more precisely what was wrong. Those are checked first,
//! then the RFC code.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::kind::TokenErrorKind;
use crate::sink::{DiagnosticSink, TracingSink};
use crate::token::OAuthTokenError;

/// Provider error codes meaning the client secret was rejected or expired.
const SECRET_CODES: &[u64] = &[7000215, 7000222];

/// Provider error codes meaning the tenant could not be resolved.
const TENANT_CODES: &[u64] = &[90002, 900023, 90072];

/// Provider error codes meaning the client is unknown or disabled.
const UNAUTHORIZED_CODES: &[u64] = &[700016, 7000112];

/// An OAuth 2.0 token endpoint error body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error_uri: Option<String>,
    #[serde(default)]
    pub error_codes: Vec<u64>,
}

impl TokenErrorResponse {
    /// Parse a JSON error body.
    ///
    /// Fails with [`Error::MalformedResponse`] if the body is not JSON or
    /// has no string `error` field.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let response: Self = serde_json::from_slice(body)?;
        if response.error.trim().is_empty() {
            return Err(Error::MalformedResponse {
                reason: "empty error code".to_string(),
            });
        }
        Ok(response)
    }

    /// Map this response onto a token failure kind, if it is one.
    pub fn classify(&self) -> Option<TokenErrorKind> {
        self.classify_provider_codes()
            .or_else(|| classify_error_code(&self.error))
    }

    fn classify_provider_codes(&self) -> Option<TokenErrorKind> {
        self.error_codes.iter().find_map(|code| {
            if SECRET_CODES.contains(code) {
                Some(TokenErrorKind::InvalidSecret)
            } else if TENANT_CODES.contains(code) {
                Some(TokenErrorKind::InvalidTenant)
            } else if UNAUTHORIZED_CODES.contains(code) {
                Some(TokenErrorKind::Unauthorized)
            } else {
                None
            }
        })
    }

    /// Classify and, on a match, construct the error (logging it once).
    pub fn into_error(self) -> Option<OAuthTokenError> {
        self.into_error_with(&TracingSink)
    }

    /// [`TokenErrorResponse::into_error`] with an injected sink.
    pub fn into_error_with(self, sink: &dyn DiagnosticSink) -> Option<OAuthTokenError> {
        let kind = self.classify()?;
        tracing::trace!(
            error = %self.error,
            codes = ?self.error_codes,
            kind = %kind,
            "classified token error response"
        );
        Some(OAuthTokenError::new_with(kind, sink))
    }
}

/// Map an RFC 6749 `error` code onto a kind.
pub fn classify_error_code(code: &str) -> Option<TokenErrorKind> {
    let code = code.trim();
    if code.eq_ignore_ascii_case("unauthorized_client") {
        Some(TokenErrorKind::Unauthorized)
    } else if code.eq_ignore_ascii_case("invalid_client") {
        Some(TokenErrorKind::InvalidSecret)
    } else if code.eq_ignore_ascii_case("invalid_tenant") {
        Some(TokenErrorKind::InvalidTenant)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;

    fn parse(json: serde_json::Value) -> TokenErrorResponse {
        TokenErrorResponse::from_slice(&serde_json::to_vec(&json).unwrap()).unwrap()
    }

    #[test]
    fn test_rfc_codes() {
        assert_eq!(
            classify_error_code("unauthorized_client"),
            Some(TokenErrorKind::Unauthorized)
        );
        assert_eq!(
            classify_error_code("invalid_client"),
            Some(TokenErrorKind::InvalidSecret)
        );
        assert_eq!(
            classify_error_code("Invalid_Tenant"),
            Some(TokenErrorKind::InvalidTenant)
        );
        assert_eq!(classify_error_code("invalid_grant"), None);
        assert_eq!(classify_error_code("access_denied"), None);
    }

    #[test]
    fn test_provider_codes_take_precedence() {
        let response = parse(serde_json::json!({
            "error": "invalid_request",
            "error_description": "AADSTS90002: Tenant 'contoso' not found.",
            "error_codes": [90002]
        }));
        assert_eq!(response.classify(), Some(TokenErrorKind::InvalidTenant));

        let response = parse(serde_json::json!({
            "error": "invalid_client",
            "error_codes": [700016]
        }));
        assert_eq!(response.classify(), Some(TokenErrorKind::Unauthorized));
    }

    #[test]
    fn test_expired_secret() {
        let response = parse(serde_json::json!({
            "error": "invalid_client",
            "error_codes": [7000222]
        }));
        assert_eq!(response.classify(), Some(TokenErrorKind::InvalidSecret));
    }

    #[test]
    fn test_unknown_provider_code_falls_back_to_rfc_code() {
        let response = parse(serde_json::json!({
            "error": "unauthorized_client",
            "error_codes": [50126]
        }));
        assert_eq!(response.classify(), Some(TokenErrorKind::Unauthorized));
    }

    #[test]
    fn test_unclassified_response_does_not_log() {
        let sink = BufferSink::new();
        let response = parse(serde_json::json!({ "error": "invalid_grant" }));
        assert!(response.into_error_with(&sink).is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_into_error_logs_once() {
        let sink = BufferSink::new();
        let response = parse(serde_json::json!({
            "error": "invalid_client",
            "error_description": "AADSTS7000215: Invalid client secret provided.",
            "error_codes": [7000215],
            "trace_id": "abc"
        }));
        let err = response.into_error_with(&sink).unwrap();
        assert_eq!(err.kind(), TokenErrorKind::InvalidSecret);
        assert_eq!(sink.messages(), vec!["secret is invalid"]);
    }

    #[test]
    fn test_malformed_bodies() {
        let err = TokenErrorResponse::from_slice(b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));

        let err = TokenErrorResponse::from_slice(br#"{"error_description":"x"}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));

        let err = TokenErrorResponse::from_slice(br#"{"error":"  "}"#).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedResponse {
                reason: "empty error code".to_string()
            }
        );
    }
}
