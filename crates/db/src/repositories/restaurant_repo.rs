//! Repository for the `restaurants` table.

use pizzeria_core::types::DbId;
use sqlx::PgPool;

use crate::models::restaurant::{CreateRestaurant, Restaurant};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address";

/// Provides create, read, and cascading delete for restaurants.
pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Insert a new restaurant, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRestaurant,
    ) -> Result<Restaurant, sqlx::Error> {
        let query = format!(
            "INSERT INTO restaurants (name, address)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find a restaurant by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all restaurants ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants ORDER BY id");
        sqlx::query_as::<_, Restaurant>(&query).fetch_all(pool).await
    }

    /// Delete a restaurant together with its `restaurant_pizzas` rows.
    ///
    /// Children are removed explicitly in the same transaction as the parent
    /// rather than relying on `ON DELETE CASCADE` alone. Returns `true` if
    /// the restaurant existed; when it did not, nothing is deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let children = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(
            restaurant_id = id,
            restaurant_pizzas = children.rows_affected(),
            "Deleted restaurant and its menu entries"
        );
        Ok(true)
    }
}
