//! Inbound token provider payload.
//!
//! The token request and its policy context arrive next to the API Gateway
//! proxy request fields. Only the gateway fields used for logging are kept.
//! Missing fields decode to empty values so that validation, not decoding,
//! decides how they are rejected.

use serde::{Deserialize, Serialize};

use crate::permissions::Permissions;

/// Full invocation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProviderInput {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub request_context: GatewayRequestContext,
    #[serde(default)]
    pub token_request: TokenRequest,
    #[serde(default)]
    pub token_context: TokenContext,
}

/// Caller-supplied part of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub owner: String,
    /// Comma-joined repository names.
    #[serde(default)]
    pub repo: Option<String>,
}

/// Policy context attached by the gateway integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenContext {
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub permissions: Permissions,
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub endpoint: Endpoint,
    #[serde(default)]
    pub target_rule: TargetRule,
}

/// GitHub App whose key and installations are used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default, rename = "type")]
    pub endpoint_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRule {
    #[serde(default)]
    pub repository_selection_mode: String,
}

/// API Gateway request context fields used for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequestContext {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub identity: GatewayIdentity,
}

/// Caller identity as seen by API Gateway (IAM or Cognito).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayIdentity {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub user_arn: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub cognito_identity_pool_id: Option<String>,
    #[serde(default)]
    pub cognito_identity_id: Option<String>,
    #[serde(default)]
    pub cognito_authentication_provider: Option<String>,
    #[serde(default)]
    pub cognito_authentication_type: Option<String>,
}
