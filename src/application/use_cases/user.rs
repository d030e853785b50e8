use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::jwt::{SessionIssuer, now_unix},
    domain::entities::{credentials::Credentials, token_response::TokenResponse},
};

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-2xx status. `body` is kept verbatim.
    #[error("Provider responded with status {status}")]
    Status { status: u16, body: String },

    #[error("Provider unreachable: {0}")]
    Transport(String),

    #[error("Provider response could not be parsed: {0}")]
    InvalidResponse(String),
}

/// External identity provider exchanging credentials for a token response.
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn register(&self, email: &str, password: &str) -> Result<TokenResponse, ProviderError>;
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ProviderError>;
}

/// A minted session token plus what the HTTP layer needs to set the cookie.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub subject: String,
    pub email: String,
    pub max_age: time::Duration,
}

#[derive(Clone)]
pub struct UserAuthUseCases {
    provider: Arc<dyn IdentityProvider>,
    issuer: Arc<SessionIssuer>,
}

impl UserAuthUseCases {
    pub fn new(provider: Arc<dyn IdentityProvider>, issuer: Arc<SessionIssuer>) -> Self {
        Self { provider, issuer }
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn register(&self, credentials: &Credentials) -> AppResult<IssuedSession> {
        ensure_complete(credentials)?;
        let response = self
            .provider
            .register(credentials.email.trim(), &credentials.password)
            .await?;
        let session = self.start_session(credentials, &response)?;
        info!(subject = %session.subject, "User registered");
        Ok(session)
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> AppResult<IssuedSession> {
        ensure_complete(credentials)?;
        let response = self
            .provider
            .login(credentials.email.trim(), &credentials.password)
            .await?;
        let session = self.start_session(credentials, &response)?;
        info!(subject = %session.subject, "User logged in");
        Ok(session)
    }

    fn start_session(
        &self,
        credentials: &Credentials,
        response: &TokenResponse,
    ) -> AppResult<IssuedSession> {
        if response.expires_in <= 0 {
            return Err(ProviderError::InvalidResponse(format!(
                "expires_in must be positive, got {}",
                response.expires_in
            ))
            .into());
        }
        let now = now_unix();
        if now.checked_add(response.expires_in).is_none() {
            return Err(ProviderError::InvalidResponse(format!(
                "expires_in {} overflows the clock",
                response.expires_in
            ))
            .into());
        }

        let subject = response.user.id.to_string();
        let email = response
            .user
            .email
            .clone()
            .unwrap_or_else(|| credentials.email.trim().to_string());

        let token = self.issuer.issue_at(response, &subject, &email, now)?;
        Ok(IssuedSession {
            token,
            subject,
            email,
            max_age: time::Duration::seconds(response.expires_in),
        })
    }
}

fn ensure_complete(credentials: &Credentials) -> AppResult<()> {
    if credentials.is_complete() {
        Ok(())
    } else {
        Err(AppError::InvalidInput(
            "Email and password are required".into(),
        ))
    }
}
