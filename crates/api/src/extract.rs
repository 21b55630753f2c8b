//! Custom extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use pizzeria_core::types::DbId;

use crate::error::AppError;

/// A single integer `{id}` path segment.
///
/// Routes only exist for integer ids, so a segment that does not parse is
/// answered as an unknown route (404) instead of axum's plain-text 400.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Non-integer id in path");
                AppError::RouteNotFound
            })?;
        Ok(Self(id))
    }
}
