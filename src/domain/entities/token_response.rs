use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session payload returned by GoTrue for `/signup` and `/token?grant_type=password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: GoTrueUser,
}

/// The subset of the GoTrue user object this service reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoTrueUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub aud: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}
