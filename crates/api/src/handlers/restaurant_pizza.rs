//! Handlers for the `/restaurant_pizzas` resource.
//!
//! Every failure on the create path (unparseable body, missing or null
//! fields, price out of range, unknown pizza or restaurant, storage
//! constraint violation, storage error) is answered with the same
//! `400 {"errors": ["validation errors"]}`. Clients are not told which
//! check failed.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pizzeria_core::restaurant_pizza::RestaurantPizzaPayload;
use pizzeria_db::models::restaurant_pizza::CreateRestaurantPizza;
use pizzeria_db::repositories::{PizzaRepo, RestaurantPizzaRepo, RestaurantRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::RestaurantPizzaCreated;

/// POST /restaurant_pizzas
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RestaurantPizzaPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RestaurantPizzaCreated>)> {
    let Json(payload) = payload.map_err(AppError::rejected)?;
    let input = CreateRestaurantPizza::try_from(payload).map_err(AppError::rejected)?;

    let pizza = PizzaRepo::find_by_id(&state.pool, input.pizza_id)
        .await
        .map_err(AppError::rejected)?
        .ok_or_else(|| AppError::rejected(format!("pizza {} does not exist", input.pizza_id)))?;
    let restaurant = RestaurantRepo::find_by_id(&state.pool, input.restaurant_id)
        .await
        .map_err(AppError::rejected)?
        .ok_or_else(|| {
            AppError::rejected(format!("restaurant {} does not exist", input.restaurant_id))
        })?;

    let created = RestaurantPizzaRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "restaurant_pizzas insert rolled back");
            AppError::rejected(err)
        })?;

    tracing::info!(
        restaurant_pizza_id = created.id,
        restaurant_id = created.restaurant_id,
        pizza_id = created.pizza_id,
        "Restaurant pizza created"
    );

    Ok((
        StatusCode::CREATED,
        Json(RestaurantPizzaCreated::new(&created, &pizza, &restaurant)),
    ))
}
