//! In-memory identity provider behaving like GoTrue's password flow.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    application::use_cases::user::{IdentityProvider, ProviderError},
    domain::entities::token_response::TokenResponse,
};

use super::create_token_response;

struct StoredUser {
    password: String,
    response: TokenResponse,
}

#[derive(Default)]
pub struct InMemoryIdentityProvider {
    users: Mutex<HashMap<String, StoredUser>>,
    calls: AtomicUsize,
    unreachable: AtomicBool,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account; `response` is what a successful login returns.
    pub fn add_user(&self, email: &str, password: &str, response: TokenResponse) {
        self.users.lock().unwrap().insert(
            email.to_string(),
            StoredUser {
                password: password.to_string(),
                response,
            },
        );
    }

    /// Make every following call fail as if the network were down.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin_call(&self) -> Result<(), ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(ProviderError::Transport("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn register(&self, email: &str, password: &str) -> Result<TokenResponse, ProviderError> {
        self.begin_call()?;
        let mut users = self.users.lock().unwrap();
        if users.contains_key(email) {
            return Err(ProviderError::Status {
                status: 422,
                body: r#"{"code":422,"msg":"User already registered"}"#.to_string(),
            });
        }
        let response = create_token_response(|r| {
            r.user.id = Uuid::new_v4();
            r.user.email = Some(email.to_string());
        });
        users.insert(
            email.to_string(),
            StoredUser {
                password: password.to_string(),
                response: response.clone(),
            },
        );
        Ok(response)
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ProviderError> {
        self.begin_call()?;
        let users = self.users.lock().unwrap();
        match users.get(email) {
            Some(user) if user.password == password => Ok(user.response.clone()),
            _ => Err(ProviderError::Status {
                status: 400,
                body: r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#
                    .to_string(),
            }),
        }
    }
}
