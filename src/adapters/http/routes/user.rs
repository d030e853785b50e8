use axum::{
    Extension, Form, Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::Serialize;

use crate::{
    adapters::http::{
        app_state::AppState,
        middleware::{AuthenticatedUser, require_session},
    },
    app_error::{AppError, AppResult},
    application::{jwt::SESSION_COOKIE, use_cases::user::IssuedSession},
    domain::entities::credentials::Credentials,
};

pub fn router(app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_session,
        ));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .merge(protected)
}

#[derive(Serialize)]
struct SessionResponse {
    id: String,
    email: String,
}

/// POST /api/user/register
/// Form body `email`, `password`. Creates the account and starts a session.
async fn register(
    State(app_state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> AppResult<impl IntoResponse> {
    let session = app_state
        .user_auth_use_cases
        .register(&credentials)
        .await?;
    session_response(&app_state, session)
}

/// POST /api/user/login
/// Form body `email`, `password`. Sets the `JWT` session cookie.
async fn login(
    State(app_state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> AppResult<impl IntoResponse> {
    let session = app_state.user_auth_use_cases.login(&credentials).await?;
    session_response(&app_state, session)
}

/// POST /api/user/logout
/// Expires the cookie on the client. Tokens are not revoked server-side.
async fn logout(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .secure(app_state.config.cookie_secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(0))
        .build();

    let mut headers = HeaderMap::new();
    append_cookie(&mut headers, cookie)?;
    Ok((StatusCode::OK, headers))
}

/// GET /api/user/me
async fn get_me(Extension(user): Extension<AuthenticatedUser>) -> impl IntoResponse {
    Json(SessionResponse {
        id: user.subject,
        email: user.email,
    })
}

fn session_response(
    app_state: &AppState,
    session: IssuedSession,
) -> AppResult<(StatusCode, HeaderMap, Json<SessionResponse>)> {
    let cookie = Cookie::build((SESSION_COOKIE, session.token))
        .http_only(true)
        .secure(app_state.config.cookie_secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(session.max_age)
        .build();

    let mut headers = HeaderMap::new();
    append_cookie(&mut headers, cookie)?;
    Ok((
        StatusCode::OK,
        headers,
        Json(SessionResponse {
            id: session.subject,
            email: session.email,
        }),
    ))
}

fn append_cookie(headers: &mut HeaderMap, cookie: Cookie<'_>) -> AppResult<()> {
    let value = HeaderValue::from_str(&cookie.to_string())
        .map_err(|_| AppError::Internal("Failed to build cookie header".into()))?;
    headers.append("set-cookie", value);
    Ok(())
}
