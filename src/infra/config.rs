use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    /// Shared HMAC secret. Signs issued session tokens and verifies incoming ones.
    pub jwt_secret: SecretString,
    /// Project API key sent to GoTrue on every request.
    pub anon_key: SecretString,
    /// GoTrue base URL, e.g. `https://<project>.supabase.co/auth/v1`.
    pub gotrue_url: Url,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Adds `Secure` to the session cookie. Enable whenever served over HTTPS.
    pub cookie_secure: bool,
    /// Seconds a token stays acceptable past its `exp`.
    pub clock_skew_secs: u64,
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret = SecretString::new(get_env::<String>("SUPABASE_JWT_SECRET").into());
        let anon_key = SecretString::new(get_env::<String>("SUPABASE_ANON_KEY").into());

        // An explicit URL wins; otherwise the hosted project URL is derived.
        let gotrue_url: Url = match std::env::var("GOTRUE_URL").ok() {
            Some(url) => url.parse().expect("GOTRUE_URL must be a valid URL"),
            None => project_auth_url(&get_env::<String>("SUPABASE_PROJECT_ID"))
                .expect("SUPABASE_PROJECT_ID must form a valid URL"),
        };

        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:8080".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let cookie_secure: bool = get_env_default("COOKIE_SECURE", false);
        let clock_skew_secs: u64 = get_env_default("CLOCK_SKEW_SECS", 0);
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            jwt_secret,
            anon_key,
            gotrue_url,
            bind_addr,
            cors_origin,
            cookie_secure,
            clock_skew_secs,
            log_file,
        }
    }
}

/// Auth endpoint of a hosted Supabase project.
pub fn project_auth_url(project_id: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("https://{}.supabase.co/auth/v1", project_id.trim()))
}
