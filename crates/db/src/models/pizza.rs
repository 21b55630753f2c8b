//! Pizza entity model and DTOs.

use pizzeria_core::types::DbId;
use sqlx::FromRow;

/// A row from the `pizzas` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Pizza {
    pub id: DbId,
    pub name: String,
    /// Free text, e.g. `"Dough, Tomato Sauce, Cheese"`.
    pub ingredients: String,
}

/// DTO for creating a new pizza.
#[derive(Debug, Clone)]
pub struct CreatePizza {
    pub name: String,
    pub ingredients: String,
}
