pub mod health;
pub mod items;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /                 greeting (GET)
/// /health           service + database health (GET)
/// /items            list, create
/// /items/{id}       get, update, delete
/// ```
///
/// The OpenAPI document and Swagger UI are mounted separately by
/// [`crate::router::build_app_router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(health::router())
        .nest("/items", items::router())
}
