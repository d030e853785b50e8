use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::{adapters::http::app_state::AppState, application::jwt::SESSION_COOKIE};

/// Identity of the caller, available to handlers behind [`require_session`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject: String,
    pub email: String,
}

/// Lets the request through only with a valid `JWT` session cookie.
///
/// Every rejection is the same bare 403.
pub async fn require_session(
    State(app_state): State<AppState>,
    cookies: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let decision = app_state
        .access_gate
        .authorize(cookies.get(SESSION_COOKIE).map(|c| c.value()));

    match (decision.allowed, decision.subject, decision.email) {
        (true, Some(subject), Some(email)) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser { subject, email });
            next.run(request).await
        }
        _ => StatusCode::FORBIDDEN.into_response(),
    }
}
