use std::sync::Arc;

use crate::{
    application::{access_gate::AccessGate, use_cases::user::UserAuthUseCases},
    infra::config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub user_auth_use_cases: Arc<UserAuthUseCases>,
    pub access_gate: Arc<AccessGate>,
}
