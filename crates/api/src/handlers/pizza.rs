//! Handlers for the `/pizzas` resource.

use axum::extract::State;
use axum::Json;
use pizzeria_db::repositories::PizzaRepo;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::PizzaSummary;

/// GET /pizzas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PizzaSummary>>> {
    let pizzas = PizzaRepo::list(&state.pool).await?;
    Ok(Json(pizzas.iter().map(PizzaSummary::from).collect()))
}
