//! Route definitions for the `/restaurants` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::restaurant;
use crate::state::AppState;

/// Routes mounted at `/restaurants`.
///
/// ```text
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurant::list))
        .route(
            "/{id}",
            get(restaurant::get_by_id).delete(restaurant::delete),
        )
}
