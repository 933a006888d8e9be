//! Invocation results as seen by the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TokenProviderError;

/// Successful invocation payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Failed invocation payload.
///
/// Returned as the Lambda error; its `Display` is the JSON document the
/// gateway integration pattern-matches on (`CK_ERR_400`, `CK_ERR_500`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub selection_pattern: String,
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            selection_pattern: format!("CK_ERR_{status}"),
            message: message.into(),
        }
    }

    /// Numeric status encoded in the selection pattern.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.selection_pattern
            .strip_prefix("CK_ERR_")
            .and_then(|status| status.parse().ok())
    }
}

impl From<&TokenProviderError> for ErrorResponse {
    fn from(err: &TokenProviderError) -> Self {
        Self::new(err.user_message(), err.status())
    }
}

impl From<TokenProviderError> for ErrorResponse {
    fn from(err: TokenProviderError) -> Self {
        Self::from(&err)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl std::error::Error for ErrorResponse {}
