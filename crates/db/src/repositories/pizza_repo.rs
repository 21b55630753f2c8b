//! Repository for the `pizzas` table.

use pizzeria_core::types::DbId;
use sqlx::PgPool;

use crate::models::pizza::{CreatePizza, Pizza};

const COLUMNS: &str = "id, name, ingredients";

/// Provides create and read operations for pizzas.
pub struct PizzaRepo;

impl PizzaRepo {
    /// Insert a new pizza, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePizza) -> Result<Pizza, sqlx::Error> {
        let query = format!(
            "INSERT INTO pizzas (name, ingredients)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pizza>(&query)
            .bind(&input.name)
            .bind(&input.ingredients)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pizza>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pizzas WHERE id = $1");
        sqlx::query_as::<_, Pizza>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all pizzas ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Pizza>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pizzas ORDER BY id");
        sqlx::query_as::<_, Pizza>(&query).fetch_all(pool).await
    }
}
