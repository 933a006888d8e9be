//! The token issuance pipeline.
//!
//! validate → private key → GitHub client → installation → token. Each stage
//! runs only after the previous one succeeded; the first failure ends the
//! invocation.

use std::sync::Arc;

use log::{error, info};

use crate::config::{ConfigError, ProviderConfig};
use crate::error::TokenProviderError;
use crate::github::GitHubConnector;
use crate::installation::{InstallationCache, InstallationResolver};
use crate::logging::{self, Invocation, RequestLogContext};
use crate::model::{TokenContext, TokenProviderInput};
use crate::response::{ErrorResponse, TokenResponse};
use crate::secrets::SecretStore;
use crate::token;
use crate::validation::{self, NormalizedSelection};

/// Issues installation access tokens.
///
/// Built once per process; the installation cache and the collaborator
/// clients are reused by every invocation.
#[derive(Clone)]
pub struct TokenProvider {
    secrets: Arc<dyn SecretStore>,
    connector: Arc<dyn GitHubConnector>,
    installations: InstallationResolver,
}

impl TokenProvider {
    pub fn new(
        secrets: Arc<dyn SecretStore>,
        connector: Arc<dyn GitHubConnector>,
        cache: Arc<InstallationCache>,
    ) -> Self {
        Self {
            secrets,
            connector,
            installations: InstallationResolver::new(cache),
        }
    }

    #[must_use]
    pub fn installation_cache(&self) -> &Arc<InstallationCache> {
        self.installations.cache()
    }

    /// Run one invocation end to end and render the caller-facing result.
    ///
    /// Configuration is checked before the payload is even decoded. The rest
    /// of the pipeline is bounded by the invocation deadline. Every record
    /// logged meanwhile carries the invocation's log fields.
    pub async fn invoke(
        &self,
        config: Result<ProviderConfig, ConfigError>,
        payload: serde_json::Value,
        invocation: &Invocation,
    ) -> Result<TokenResponse, ErrorResponse> {
        let early_context = || RequestLogContext::from_invocation(invocation);

        let config = config.map_err(|err| {
            logging::in_context(early_context(), || error!("{err}"));
            ErrorResponse::from(TokenProviderError::from(err))
        })?;

        let input: TokenProviderInput = serde_json::from_value(payload).map_err(|e| {
            let err = TokenProviderError::Configuration(format!("Undecodable token request: {e}"));
            logging::in_context(early_context(), || error!("{err}"));
            ErrorResponse::from(err)
        })?;

        let context = RequestLogContext::new(&input, invocation);
        logging::scoped(context, self.run(&config, &input, invocation)).await
    }

    async fn run(
        &self,
        config: &ProviderConfig,
        input: &TokenProviderInput,
        invocation: &Invocation,
    ) -> Result<TokenResponse, ErrorResponse> {
        logging::log_initial_request(input);

        let pipeline = self.handle(config, input);
        let result = match invocation.remaining() {
            Some(remaining) => tokio::time::timeout(remaining, pipeline)
                .await
                .unwrap_or(Err(TokenProviderError::DeadlineExceeded)),
            None => pipeline.await,
        };

        match result {
            Ok(response) => {
                info!("TokenCreated");
                Ok(response)
            }
            Err(err) => {
                if err.is_input_error() {
                    info!("{err}");
                } else {
                    error!("{err}");
                }
                Err(ErrorResponse::from(&err))
            }
        }
    }

    /// Validate the request, then issue the token.
    pub async fn handle(
        &self,
        config: &ProviderConfig,
        input: &TokenProviderInput,
    ) -> Result<TokenResponse, TokenProviderError> {
        let request = &input.token_request;
        let context = &input.token_context;

        let selection = validation::validate(
            &context.endpoint.endpoint_type,
            &context.target_rule.repository_selection_mode,
            &request.owner,
            request.repo.as_deref(),
        )?;

        self.issue(config, context, &selection).await
    }

    /// Fetch the key, build the client, resolve the installation and mint.
    pub async fn issue(
        &self,
        config: &ProviderConfig,
        context: &TokenContext,
        selection: &NormalizedSelection,
    ) -> Result<TokenResponse, TokenProviderError> {
        let app_id = u64::try_from(context.app.id).map_err(|_| {
            TokenProviderError::Configuration(format!("Invalid GitHub App id {}", context.app.id))
        })?;

        let private_key = self
            .secrets
            .private_key(config.storage(), config.prefix(), &context.app.name)
            .await?;

        let client = self
            .connector
            .connect(app_id, &private_key)
            .map_err(TokenProviderError::ClientConstruction)?;

        let owner = selection.owner();
        let installation_id = self
            .installations
            .resolve(client.as_ref(), app_id, owner)
            .await
            .map_err(|source| TokenProviderError::InstallationNotFound {
                owner: owner.to_string(),
                source,
            })?;

        let access_token = token::mint(
            client.as_ref(),
            installation_id,
            &context.permissions,
            selection.repositories(),
        )
        .await
        .map_err(TokenProviderError::Token)?;

        Ok(TokenResponse {
            token: access_token.token,
        })
    }
}
