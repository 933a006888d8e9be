//! Installation lookup and token minting through the Octocrab connector.

use super::support::{APP_ID, app_private_key, install_crypto_provider};
use ghrawel_tokenprovider::token;
use ghrawel_tokenprovider::{
    AccessLevel, GitHubConnector, InstallationCache, InstallationResolver, OctocrabConnector,
    Permissions, PrivateKey,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_resolve_then_mint_against_mock_api() {
    install_crypto_provider();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/app/installations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "account": {"login": "djonser"}},
            {"id": 9, "account": {"login": "catnekaise"}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/app/installations/9/access_tokens"))
        .and(body_json(json!({
            "repositories": ["example-repo"],
            "permissions": {"pull_requests": "write"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": "ghs_minted",
            "expires_at": "2030-01-01T00:00:00Z"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let connector = OctocrabConnector::new().with_base_uri(server.uri());
    let client = connector
        .connect(APP_ID, &PrivateKey::new(app_private_key()))
        .unwrap();
    let resolver = InstallationResolver::new(Arc::new(InstallationCache::new()));
    let permissions = Permissions::new().with("pull_requests", AccessLevel::Write);
    let repositories = vec!["example-repo".to_string()];

    // The listing mock expects a single call; the second round hits the cache.
    for _ in 0..2 {
        let installation_id = resolver
            .resolve(client.as_ref(), APP_ID, "catnekaise")
            .await
            .unwrap();
        assert_eq!(installation_id, 9);

        let access_token = token::mint(
            client.as_ref(),
            installation_id,
            &permissions,
            Some(repositories.as_slice()),
        )
        .await
        .unwrap();
        assert_eq!(access_token.token, "ghs_minted");
    }
}
