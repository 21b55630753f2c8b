pub mod health;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                         landing page (GET)
///
/// /restaurants              list (GET)
/// /restaurants/{id}         get with menu, delete (GET, DELETE)
///
/// /pizzas                   list (GET)
///
/// /restaurant_pizzas        create (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index::index))
        .nest("/restaurants", restaurant::router())
        .nest("/pizzas", pizza::router())
        .nest("/restaurant_pizzas", restaurant_pizza::router())
}
