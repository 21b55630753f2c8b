//! Demo data for local development.
//!
//! Restaurants and pizzas have no create endpoint, so a fresh database is
//! populated through here (see the `pizzeria-seed` binary).

use sqlx::PgPool;

use crate::models::pizza::CreatePizza;
use crate::models::restaurant::CreateRestaurant;
use crate::models::restaurant_pizza::CreateRestaurantPizza;
use crate::repositories::{PizzaRepo, RestaurantPizzaRepo, RestaurantRepo};

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// `(restaurant index, pizza index, price)` into the tables above.
const MENU: &[(usize, usize, i32)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

/// Row counts written by [`seed_demo_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Wipe all three tables and insert the demo rows.
pub async fn seed_demo_data(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    sqlx::query("TRUNCATE restaurant_pizzas, restaurants, pizzas RESTART IDENTITY")
        .execute(pool)
        .await?;
    tracing::info!("Cleared existing restaurants, pizzas and menu entries");

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let input = CreateRestaurant {
            name: (*name).to_string(),
            address: (*address).to_string(),
        };
        restaurants.push(RestaurantRepo::create(pool, &input).await?);
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let input = CreatePizza {
            name: (*name).to_string(),
            ingredients: (*ingredients).to_string(),
        };
        pizzas.push(PizzaRepo::create(pool, &input).await?);
    }

    for &(restaurant_idx, pizza_idx, price) in MENU {
        let input = CreateRestaurantPizza {
            price,
            pizza_id: pizzas[pizza_idx].id,
            restaurant_id: restaurants[restaurant_idx].id,
        };
        RestaurantPizzaRepo::create(pool, &input).await?;
    }

    Ok(SeedSummary {
        restaurants: restaurants.len(),
        pizzas: pizzas.len(),
        restaurant_pizzas: MENU.len(),
    })
}
