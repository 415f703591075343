use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / -- plain-text greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Greeting", content_type = "text/plain", body = String)
    )
)]
pub async fn hello() -> &'static str {
    "Hello World!"
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(hello))
}
