use axum::{Extension, Router, middleware, response::Html, routing::get};

use crate::adapters::http::{
    app_state::AppState,
    middleware::{AuthenticatedUser, require_session},
};

pub fn router(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/account", get(account_page))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_session,
        ))
}

/// GET /account
async fn account_page(Extension(user): Extension<AuthenticatedUser>) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" lang="de">
<head>
    <meta charset="UTF-8">
    <title>Title</title>
</head>
Logged user: <span>{}</span>
<body>
<h1>You are authenticated</h1>
</body>
</html>
"#,
        escape_html(&user.subject)
    ))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
