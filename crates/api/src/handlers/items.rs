//! Handlers for the `/items` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use items_core::error::CoreError;
use items_core::item::{self, ENTITY};
use items_core::types::DbId;
use items_db::models::item::{CreateItem, Item, UpdateItem};
use items_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extract::{JsonBody, PathId};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /items
///
/// Create a new item. `name` is required; `description` defaults to empty.
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    item::require_name(input.name.as_deref())?;
    if let Some(description) = &input.description {
        item::validate_description(description)?;
    }

    let created = ItemRepo::create(&state.pool, &input).await?;
    tracing::info!(item_id = created.id, "Item created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /items
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All stored items", body = [Item]),
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = ItemRepo::list(&state.pool).await?;
    Ok(Json(items))
}

/// GET /items/{id}
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "No item with this id", body = ErrorBody),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Item>> {
    let found = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(found))
}

/// PUT /items/{id}
///
/// Partial update: omitted fields keep their stored value. The body is
/// checked before the item is looked up, so an empty body on an unknown id
/// is a 400.
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "The updated item", body = Item),
        (status = 400, description = "No data provided or invalid fields", body = ErrorBody),
        (status = 404, description = "No item with this id", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(input): JsonBody<UpdateItem>,
) -> AppResult<Json<Item>> {
    item::require_any_field(input.name.is_some(), input.description.is_some())?;
    if let Some(name) = &input.name {
        item::validate_name(name)?;
    }
    if let Some(description) = &input.description {
        item::validate_description(description)?;
    }

    let updated = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(item_id = id, "Item updated");
    Ok(Json(updated))
}

/// DELETE /items/{id}
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "No item with this id", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<MessageResponse>> {
    if !ItemRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(item_id = id, "Item deleted");
    Ok(Json(MessageResponse::new("Item deleted")))
}
