use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use crate::app_error::{AppError, AppResult};
use crate::domain::entities::token_response::TokenResponse;

/// Audience every session token is minted for and checked against.
pub const AUDIENCE: &str = "authenticated";

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "JWT";

const ROLE: &str = "authenticated";

// ============================================================================
// Session Claims
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub aud: String,
    pub email: String,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Identity recovered from a token that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSession {
    pub subject: String,
    pub email: String,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature does not match")]
    BadSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Token audience is not accepted")]
    WrongAudience,
}

pub(crate) fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

// ============================================================================
// Issuing
// ============================================================================

/// Mints HS256 session tokens with the process-wide secret.
pub struct SessionIssuer {
    key: EncodingKey,
}

impl SessionIssuer {
    pub fn new(secret: &SecretString) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.expose_secret().as_bytes()),
        }
    }

    pub fn issue(
        &self,
        token_response: &TokenResponse,
        subject: &str,
        email: &str,
    ) -> AppResult<String> {
        self.issue_at(token_response, subject, email, now_unix())
    }

    /// Same as [`SessionIssuer::issue`] with an explicit clock reading.
    pub fn issue_at(
        &self,
        token_response: &TokenResponse,
        subject: &str,
        email: &str,
        now: i64,
    ) -> AppResult<String> {
        if token_response.expires_in <= 0 {
            return Err(AppError::InvalidInput(
                "Provider returned a non-positive token lifetime".into(),
            ));
        }
        let exp = now.checked_add(token_response.expires_in).ok_or_else(|| {
            AppError::InvalidInput("Provider token lifetime overflows the clock".into())
        })?;

        let claims = SessionClaims {
            sub: subject.to_string(),
            aud: AUDIENCE.to_string(),
            email: email.to_string(),
            exp,
            iat: now,
            role: Some(ROLE.to_string()),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|e| AppError::Internal(e.to_string()))
    }
}

// ============================================================================
// Verification
// ============================================================================

/// Checks signature, expiry and audience of session tokens.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
    clock_skew_secs: i64,
}

impl TokenVerifier {
    pub fn new(secret: &SecretString, clock_skew_secs: u64) -> Self {
        // Expiry and audience are checked by hand below so that each failure
        // keeps its own kind and the `exp <= now` boundary is exact.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
            clock_skew_secs: i64::try_from(clock_skew_secs).unwrap_or(i64::MAX),
        }
    }

    pub fn verify(&self, token: &str) -> Result<VerifiedSession, VerifyError> {
        self.verify_at(token, now_unix())
    }

    /// Same as [`TokenVerifier::verify`] with an explicit clock reading.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<VerifiedSession, VerifyError> {
        let claims = decode::<SessionClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => VerifyError::BadSignature,
                _ => VerifyError::Malformed,
            })?;

        if claims.exp <= now.saturating_sub(self.clock_skew_secs) {
            return Err(VerifyError::Expired);
        }

        if claims.aud != AUDIENCE {
            return Err(VerifyError::WrongAudience);
        }

        Ok(VerifiedSession {
            subject: claims.sub,
            email: claims.email,
        })
    }
}
