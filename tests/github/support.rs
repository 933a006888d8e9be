//! Mock GitHub API and App key fixtures.

use std::sync::OnceLock;

use ghrawel_tokenprovider::GitHubClient;
use rsa::RsaPrivateKey;
use rsa::pkcs1::{EncodeRsaPrivateKey, LineEnding};
use wiremock::MockServer;

pub const APP_ID: u64 = 1234;

/// PEM (PKCS#1) of a throwaway App key, generated once per test binary.
pub fn app_private_key() -> &'static str {
    static PEM: OnceLock<String> = OnceLock::new();
    PEM.get_or_init(|| {
        let key = RsaPrivateKey::new(&mut rand::thread_rng(), 2048).unwrap();
        key.to_pkcs1_pem(LineEnding::LF).unwrap().to_string()
    })
}

pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

pub fn client_for(server: &MockServer) -> GitHubClient {
    install_crypto_provider();
    GitHubClient::builder()
        .app(APP_ID, app_private_key())
        .base_uri(server.uri())
        .build()
        .unwrap()
}
