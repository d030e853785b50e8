//! Test data factories and fixture constants.
//!
//! Factory functions create complete, valid objects with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use secrecy::SecretString;
use uuid::Uuid;

use crate::{
    application::jwt::{AUDIENCE, SessionClaims},
    domain::entities::token_response::{GoTrueUser, TokenResponse},
};

/// Shared secret used by the fixtures under `fixtures/`.
pub const TEST_JWT_SECRET: &str =
    "VhLI85yN/oF3Eu95epgHOeg/iRIGiJtk2PWyCyCdORRuVVW90wToyJcJXZcHuHZ2dh7qVgH0UMjqbq1gGMF6JQ==";

pub const TEST_SUBJECT: &str = "f802c3bb-223e-43a6-bba0-5ae6094f0d91";
pub const TEST_EMAIL: &str = "first.last@example.com";
pub const TEST_PASSWORD: &str = "test1234";

pub fn test_secret() -> SecretString {
    SecretString::from(TEST_JWT_SECRET.to_string())
}

/// Create a provider token response for the fixture user.
pub fn create_token_response(overrides: impl FnOnce(&mut TokenResponse)) -> TokenResponse {
    let mut response = TokenResponse {
        access_token: "provider-access-token".to_string(),
        token_type: "bearer".to_string(),
        expires_in: 3600,
        refresh_token: "provider-refresh-token".to_string(),
        user: GoTrueUser {
            id: Uuid::parse_str(TEST_SUBJECT).expect("fixture subject is a uuid"),
            email: Some(TEST_EMAIL.to_string()),
            aud: Some(AUDIENCE.to_string()),
            role: Some("authenticated".to_string()),
        },
    };
    overrides(&mut response);
    response
}

/// Create session claims for the fixture user expiring one hour from now.
pub fn create_test_claims(overrides: impl FnOnce(&mut SessionClaims)) -> SessionClaims {
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    let mut claims = SessionClaims {
        sub: TEST_SUBJECT.to_string(),
        aud: AUDIENCE.to_string(),
        email: TEST_EMAIL.to_string(),
        exp: now + 3600,
        iat: now,
        role: Some("authenticated".to_string()),
    };
    overrides(&mut claims);
    claims
}

/// Sign fixture claims with [`TEST_JWT_SECRET`].
pub fn sign_test_claims(overrides: impl FnOnce(&mut SessionClaims)) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &create_test_claims(overrides),
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("fixture claims should encode")
}

/// The pre-expired token from `fixtures/expired-jwt.txt`.
pub fn expired_fixture_token() -> String {
    include_str!("../../fixtures/expired-jwt.txt").trim().to_string()
}
