//! Route definitions for the `/pizzas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pizza;
use crate::state::AppState;

/// Routes mounted at `/pizzas`.
///
/// ```text
/// GET    /        -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(pizza::list))
}
