//! Restaurant entity model and DTOs.

use pizzeria_core::types::DbId;
use sqlx::FromRow;

/// A row from the `restaurants` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Restaurant {
    pub id: DbId,
    pub name: String,
    pub address: String,
}

/// DTO for creating a new restaurant.
#[derive(Debug, Clone)]
pub struct CreateRestaurant {
    pub name: String,
    pub address: String,
}
