use serde::{Deserialize, Serialize};

/// Email/password pair submitted by the login and registration forms.
///
/// Never stored; it lives only for the duration of one provider call.
#[derive(Clone, Deserialize, Serialize)]
pub struct Credentials {
    // A missing field is treated like a blank one.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must carry something other than whitespace. Anything beyond
    /// that is left for the identity provider to judge.
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

// Keeps passwords out of `#[instrument]` spans and error logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
