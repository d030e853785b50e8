use tracing::debug;

use crate::application::jwt::TokenVerifier;

/// Outcome of checking one request's session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub subject: Option<String>,
    pub email: Option<String>,
}

impl AccessDecision {
    pub fn deny() -> Self {
        Self {
            allowed: false,
            subject: None,
            email: None,
        }
    }

    fn allow(subject: String, email: String) -> Self {
        Self {
            allowed: true,
            subject: Some(subject),
            email: Some(email),
        }
    }
}

/// Stateless allow/deny decision over the session cookie.
///
/// Every verification failure collapses into the same [`AccessDecision::deny`];
/// the failure kind only reaches the debug log.
#[derive(Clone)]
pub struct AccessGate {
    verifier: TokenVerifier,
}

impl AccessGate {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self { verifier }
    }

    pub fn authorize(&self, cookie_value: Option<&str>) -> AccessDecision {
        let Some(token) = cookie_value else {
            debug!("No session cookie");
            return AccessDecision::deny();
        };

        match self.verifier.verify(token) {
            Ok(session) => AccessDecision::allow(session.subject, session.email),
            Err(reason) => {
                debug!(%reason, "Session cookie rejected");
                AccessDecision::deny()
            }
        }
    }
}
