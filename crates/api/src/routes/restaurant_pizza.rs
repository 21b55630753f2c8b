//! Route definitions for the `/restaurant_pizzas` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::restaurant_pizza;
use crate::state::AppState;

/// Routes mounted at `/restaurant_pizzas`.
///
/// ```text
/// POST   /        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(restaurant_pizza::create))
}
