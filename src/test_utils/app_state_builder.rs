//! Test app state builder for HTTP-level testing.
//!
//! Builds an `AppState` around the fixture secret and an identity provider
//! of the test's choosing (in-memory by default).

use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::user::IdentityProvider,
    infra::{config::AppConfig, setup::build_app_state},
};

use super::{InMemoryIdentityProvider, TEST_JWT_SECRET};

/// Builder for creating `AppState` with test dependencies.
///
/// # Example
///
/// ```ignore
/// let provider = Arc::new(InMemoryIdentityProvider::new());
/// provider.add_user(TEST_EMAIL, TEST_PASSWORD, create_token_response(|_| {}));
///
/// let app_state = TestAppStateBuilder::new()
///     .with_provider(provider)
///     .build();
/// ```
pub struct TestAppStateBuilder {
    provider: Arc<dyn IdentityProvider>,
    gotrue_url: Url,
    cookie_secure: bool,
    clock_skew_secs: u64,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            provider: Arc::new(InMemoryIdentityProvider::new()),
            gotrue_url: Url::parse("http://gotrue.test").expect("static test url"),
            cookie_secure: false,
            clock_skew_secs: 0,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_gotrue_url(mut self, url: Url) -> Self {
        self.gotrue_url = url;
        self
    }

    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    pub fn with_clock_skew_secs(mut self, secs: u64) -> Self {
        self.clock_skew_secs = secs;
        self
    }

    /// The config the state is built from, so tests can reuse its values.
    pub fn config(&self) -> AppConfig {
        AppConfig {
            jwt_secret: SecretString::from(TEST_JWT_SECRET.to_string()),
            anon_key: SecretString::from("anon-key".to_string()),
            gotrue_url: self.gotrue_url.clone(),
            bind_addr: "127.0.0.1:0".parse().expect("static test addr"),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            cookie_secure: self.cookie_secure,
            clock_skew_secs: self.clock_skew_secs,
            log_file: "test.log".to_string(),
        }
    }

    pub fn build(self) -> AppState {
        let config = self.config();
        build_app_state(config, self.provider)
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
