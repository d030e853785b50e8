pub mod account;
pub mod user;

use axum::Router;

use crate::adapters::http::app_state::AppState;

/// Protected routers need the state up front to build the session gate.
pub fn router(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/user", user::router(app_state))
        .merge(account::router(app_state))
}
