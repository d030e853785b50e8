//! GoTrue (Supabase Auth) client for the email/password flow.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::{
    application::use_cases::user::{IdentityProvider, ProviderError},
    domain::entities::token_response::TokenResponse,
    infra::http_client::build_client,
};

const SIGNUP_PATH: &str = "/signup";
const PASSWORD_GRANT_PATH: &str = "/token?grant_type=password";

#[derive(Serialize)]
struct PasswordPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Clone)]
pub struct GoTrueClient {
    client: Client,
    base_url: Url,
    anon_key: SecretString,
}

impl GoTrueClient {
    pub fn new(base_url: Url, anon_key: SecretString) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client()?,
            base_url,
            anon_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn exchange(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<TokenResponse, ProviderError> {
        let url = self.endpoint(path);
        debug!(%url, "Calling GoTrue");

        let key = self.anon_key.expose_secret();
        let response = self
            .client
            .post(&url)
            .header("apikey", key)
            .bearer_auth(key)
            .json(&PasswordPayload { email, password })
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, %url, "Failed to read GoTrue error body");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), %url, "GoTrue rejected request");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for GoTrueClient {
    async fn register(&self, email: &str, password: &str) -> Result<TokenResponse, ProviderError> {
        self.exchange(SIGNUP_PATH, email, password).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ProviderError> {
        self.exchange(PASSWORD_GRANT_PATH, email, password).await
    }
}
