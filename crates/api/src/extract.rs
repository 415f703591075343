//! Request extractors that report failures as [`AppError`].

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use items_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body.
///
/// Behaves like [`axum::Json`] but rejects with an [`AppError`] so that an
/// absent, malformed or mistyped body produces the same `{error, code}` 400
/// response as every other client error.
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<CreateItem>) -> AppResult<Json<Item>> { ... }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Numeric `{id}` path segment.
///
/// A segment that is not an integer, or does not fit in an `i64`, is
/// rejected with a JSON 400 instead of axum's plain-text response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
