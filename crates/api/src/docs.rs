//! Generated OpenAPI document for the HTTP API.
//!
//! Paths and schemas are collected from the `#[utoipa::path]` annotations on
//! the handlers; the document is served as JSON and rendered by Swagger UI.

use utoipa::OpenApi;

use crate::config::ServerConfig;
use crate::error::ErrorBody;
use crate::handlers::items;
use crate::response::MessageResponse;
use crate::routes::{health, root};

/// URL the raw OpenAPI document is served from.
pub const SPEC_PATH: &str = "/apispec_1.json";

/// URL prefix of the Swagger UI.
pub const UI_PATH: &str = "/apidocs";

#[derive(OpenApi)]
#[openapi(
    info(description = "CRUD service for a single Item resource."),
    paths(
        root::hello,
        health::health_check,
        items::create,
        items::list,
        items::get_by_id,
        items::update,
        items::delete,
    ),
    components(schemas(
        items_db::models::item::Item,
        items_db::models::item::CreateItem,
        items_db::models::item::UpdateItem,
        ErrorBody,
        MessageResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "items", description = "Item management endpoints"),
        (name = "health", description = "Liveness endpoints"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI document, titled per configuration.
pub fn openapi(config: &ServerConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = config.api_title.clone();
    doc
}
