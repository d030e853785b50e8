use crate::{
    adapters::{gotrue::GoTrueClient, http::app_state::AppState},
    application::{
        access_gate::AccessGate,
        jwt::{SessionIssuer, TokenVerifier},
        use_cases::user::{IdentityProvider, UserAuthUseCases},
    },
    infra::{config::AppConfig, error::InfraError},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let provider = Arc::new(
        GoTrueClient::new(config.gotrue_url.clone(), config.anon_key.clone())
            .map_err(InfraError::HttpClient)?,
    );

    Ok(build_app_state(config, provider))
}

/// Wires the issuer, verifier and use cases around one shared secret.
pub fn build_app_state(config: AppConfig, provider: Arc<dyn IdentityProvider>) -> AppState {
    let issuer = Arc::new(SessionIssuer::new(&config.jwt_secret));
    let verifier = TokenVerifier::new(&config.jwt_secret, config.clock_skew_secs);

    let user_auth_use_cases = UserAuthUseCases::new(provider, issuer);

    AppState {
        config: Arc::new(config),
        user_auth_use_cases: Arc::new(user_auth_use_cases),
        access_gate: Arc::new(AccessGate::new(verifier)),
    }
}

pub fn init_tracing(log_file: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gotrue_session=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); console only if the file can't be created
    let json_layer = File::create(log_file).ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
