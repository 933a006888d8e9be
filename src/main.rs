// Token Provider Lambda: GitHub App installation tokens
//
// This binary serves the token provider behind an API Gateway integration.
// Clients and the installation cache are created once here and reused by
// every invocation the execution environment handles.

use std::sync::Arc;

use anyhow::Result;
use ghrawel_tokenprovider::config::{self, ProviderConfig};
use ghrawel_tokenprovider::{
    AwsSecretStore, InstallationCache, Invocation, OctocrabConnector, TokenProvider, logging,
};
use lambda_runtime::{LambdaEvent, service_fn};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    // octocrab and the AWS SDK may both pull in rustls; pin the provider.
    let _ = rustls::crypto::ring::default_provider().install_default();

    logging::init(config::debug_logging_from_env());

    let secrets = AwsSecretStore::from_env().await;

    let mut connector = OctocrabConnector::new();
    if let Some(url) = config::github_api_url_from_env() {
        info!("Using GitHub API at {url}");
        connector = connector.with_base_uri(url);
    }

    let provider = Arc::new(TokenProvider::new(
        Arc::new(secrets),
        Arc::new(connector),
        Arc::new(InstallationCache::new()),
    ));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let provider = provider.clone();
        async move {
            let (payload, context) = (event.payload, event.context);
            let invocation = Invocation {
                request_id: context.request_id,
                function_arn: context.invoked_function_arn,
                deadline_ms: Some(context.deadline),
            };

            provider
                .invoke(ProviderConfig::from_env(), payload, &invocation)
                .await
                .map_err(lambda_runtime::Error::from)
        }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}
