use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages never include secrets; use `%e` rather than `?e` in logs.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("HTTP client initialization failed")]
    HttpClient(#[source] reqwest::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
