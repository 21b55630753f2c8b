//! Repository for the `restaurant_pizzas` table.

use pizzeria_core::types::DbId;
use sqlx::PgPool;

use crate::models::restaurant_pizza::{
    CreateRestaurantPizza, RestaurantPizza, RestaurantPizzaWithPizza,
};

const COLUMNS: &str = "id, price, pizza_id, restaurant_id";

/// Provides create and read operations for restaurant/pizza associations.
pub struct RestaurantPizzaRepo;

impl RestaurantPizzaRepo {
    /// Insert a new association inside its own transaction.
    ///
    /// Foreign key and price CHECK violations surface as `sqlx::Error::Database`.
    /// The pending write is rolled back before the error is returned.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRestaurantPizza,
    ) -> Result<RestaurantPizza, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, RestaurantPizza>(&query)
            .bind(input.price)
            .bind(input.pizza_id)
            .bind(input.restaurant_id)
            .fetch_one(&mut *tx)
            .await;

        match inserted {
            Ok(row) => {
                tx.commit().await?;
                Ok(row)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "Rollback of restaurant_pizzas insert failed");
                }
                Err(err)
            }
        }
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RestaurantPizza>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurant_pizzas WHERE id = $1");
        sqlx::query_as::<_, RestaurantPizza>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a restaurant's associations joined with each pizza's own columns,
    /// ordered by association ID.
    pub async fn list_by_restaurant(
        pool: &PgPool,
        restaurant_id: DbId,
    ) -> Result<Vec<RestaurantPizzaWithPizza>, sqlx::Error> {
        sqlx::query_as::<_, RestaurantPizzaWithPizza>(
            "SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
                    p.name AS pizza_name, p.ingredients AS pizza_ingredients
             FROM restaurant_pizzas rp
             JOIN pizzas p ON p.id = rp.pizza_id
             WHERE rp.restaurant_id = $1
             ORDER BY rp.id",
        )
        .bind(restaurant_id)
        .fetch_all(pool)
        .await
    }

    /// Count the associations referencing a restaurant.
    pub async fn count_by_restaurant(
        pool: &PgPool,
        restaurant_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = $1",
        )
        .bind(restaurant_id)
        .fetch_one(pool)
        .await
    }
}
