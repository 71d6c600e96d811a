/**
 * Request Extractors
 *
 * `Valid<T>` deserializes a JSON body and runs its `Validate` rules;
 * `PathId` parses a single `{id}` path segment as an `ObjectId`. Both
 * reject with a 400 `AppError` before the handler (and so the store) is
 * reached.
 */

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::AppError;
use crate::shared::{ObjectId, Validate};

/// A JSON body that passed validation
#[derive(Debug, Clone)]
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate().map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            AppError::from(e)
        })?;
        Ok(Valid(value))
    }
}

/// An `ObjectId` taken from the route's only path parameter
#[derive(Debug, Clone)]
pub struct PathId(pub ObjectId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(PathId(ObjectId::parse(&raw)?))
    }
}
