//! Per-endpoint response views.
//!
//! Each struct is a read-only projection of one or more rows, built with
//! `From`. Nested objects are always summaries carrying their own columns
//! only, so the restaurant -> association -> pizza graph cannot recurse.
//! JSON field order follows declaration order.

use pizzeria_core::types::DbId;
use pizzeria_db::models::pizza::Pizza;
use pizzeria_db::models::restaurant::Restaurant;
use pizzeria_db::models::restaurant_pizza::{RestaurantPizza, RestaurantPizzaWithPizza};
use serde::Serialize;

/// `GET /restaurants` item, and the nested restaurant of a created association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantSummary {
    pub id: DbId,
    pub name: String,
    pub address: String,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(row: &Restaurant) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            address: row.address.clone(),
        }
    }
}

/// `GET /pizzas` item, and the nested pizza everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PizzaSummary {
    pub id: DbId,
    pub name: String,
    pub ingredients: String,
}

impl From<&Pizza> for PizzaSummary {
    fn from(row: &Pizza) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            ingredients: row.ingredients.clone(),
        }
    }
}

/// One menu entry inside [`RestaurantDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantPizzaEntry {
    pub id: DbId,
    pub price: i32,
    pub pizza_id: DbId,
    pub restaurant_id: DbId,
    pub pizza: PizzaSummary,
}

impl From<&RestaurantPizzaWithPizza> for RestaurantPizzaEntry {
    fn from(row: &RestaurantPizzaWithPizza) -> Self {
        Self {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: PizzaSummary {
                id: row.pizza_id,
                name: row.pizza_name.clone(),
                ingredients: row.pizza_ingredients.clone(),
            },
        }
    }
}

/// `GET /restaurants/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantDetail {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

impl RestaurantDetail {
    pub fn new(restaurant: &Restaurant, menu: &[RestaurantPizzaWithPizza]) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            restaurant_pizzas: menu.iter().map(RestaurantPizzaEntry::from).collect(),
        }
    }
}

/// `POST /restaurant_pizzas` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantPizzaCreated {
    pub id: DbId,
    pub price: i32,
    pub pizza_id: DbId,
    pub restaurant_id: DbId,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl RestaurantPizzaCreated {
    pub fn new(row: &RestaurantPizza, pizza: &Pizza, restaurant: &Restaurant) -> Self {
        Self {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: PizzaSummary::from(pizza),
            restaurant: RestaurantSummary::from(restaurant),
        }
    }
}
