//! Handlers for the `/restaurants` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pizzeria_core::error::CoreError;
use pizzeria_core::types::DbId;
use pizzeria_db::repositories::{RestaurantPizzaRepo, RestaurantRepo};

use crate::error::{AppError, AppResult};
use crate::extract::EntityId;
use crate::state::AppState;
use crate::views::{RestaurantDetail, RestaurantSummary};

fn restaurant_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Restaurant",
        id,
    })
}

/// GET /restaurants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<RestaurantSummary>>> {
    let restaurants = RestaurantRepo::list(&state.pool).await?;
    Ok(Json(restaurants.iter().map(RestaurantSummary::from).collect()))
}

/// GET /restaurants/{id}
///
/// Includes the restaurant's menu entries, each with its pizza.
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<RestaurantDetail>> {
    let restaurant = RestaurantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| restaurant_not_found(id))?;
    let menu = RestaurantPizzaRepo::list_by_restaurant(&state.pool, id).await?;
    Ok(Json(RestaurantDetail::new(&restaurant, &menu)))
}

/// DELETE /restaurants/{id}
///
/// Removes the restaurant's menu entries along with it. Pizzas are untouched.
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<StatusCode> {
    let deleted = RestaurantRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(restaurant_id = id, "Restaurant deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(restaurant_not_found(id))
    }
}
