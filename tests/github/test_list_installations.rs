//! Tests for listing App installations.

use super::support::client_for;
use ghrawel_tokenprovider::{GitHubApps, GitHubError};
use serde_json::json;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_installations_decodes_accounts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/installations"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 11, "account": {"login": "catnekaise", "id": 1, "type": "Organization"}, "app_id": 1234},
            {"id": 12, "account": {"login": "djonser", "id": 2, "type": "User"}, "app_id": 1234}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let installations = GitHubApps::list_installations(&client).await.unwrap();

    assert_eq!(installations.len(), 2);
    assert_eq!(installations[0].id, 11);
    assert_eq!(installations[0].account.login, "catnekaise");
    assert_eq!(installations[1].account.login, "djonser");
}

#[tokio::test]
async fn test_list_installations_surfaces_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/installations"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "A JSON web token could not be decoded",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = GitHubApps::list_installations(&client).await.unwrap_err();

    assert!(matches!(err, GitHubError::Octocrab(_)));
}
