//! Restaurant/pizza association model and DTOs.

use pizzeria_core::error::CoreError;
use pizzeria_core::restaurant_pizza::RestaurantPizzaPayload;
use pizzeria_core::types::DbId;
use sqlx::FromRow;

/// A row from the `restaurant_pizzas` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RestaurantPizza {
    pub id: DbId,
    pub price: i32,
    pub pizza_id: DbId,
    pub restaurant_id: DbId,
}

/// An association joined with its pizza's own columns.
///
/// Produced by an explicit JOIN so nested rendering never has to walk
/// relationships lazily.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RestaurantPizzaWithPizza {
    pub id: DbId,
    pub price: i32,
    pub pizza_id: DbId,
    pub restaurant_id: DbId,
    pub pizza_name: String,
    pub pizza_ingredients: String,
}

/// DTO for creating a new association. All fields are required.
#[derive(Debug, Clone)]
pub struct CreateRestaurantPizza {
    pub price: i32,
    pub pizza_id: DbId,
    pub restaurant_id: DbId,
}

impl TryFrom<RestaurantPizzaPayload> for CreateRestaurantPizza {
    type Error = CoreError;

    fn try_from(payload: RestaurantPizzaPayload) -> Result<Self, Self::Error> {
        payload.check()?;
        match (payload.price, payload.pizza_id, payload.restaurant_id) {
            (Some(price), Some(pizza_id), Some(restaurant_id)) => Ok(Self {
                price,
                pizza_id,
                restaurant_id,
            }),
            _ => Err(CoreError::Validation("missing required field".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn complete_payload_converts() {
        let payload = RestaurantPizzaPayload {
            price: Some(12),
            pizza_id: Some(4),
            restaurant_id: Some(9),
        };
        let input = CreateRestaurantPizza::try_from(payload).unwrap();
        assert_eq!(input.price, 12);
        assert_eq!(input.pizza_id, 4);
        assert_eq!(input.restaurant_id, 9);
    }

    #[test]
    fn invalid_payload_does_not_convert() {
        let payload = RestaurantPizzaPayload {
            price: Some(31),
            pizza_id: Some(4),
            restaurant_id: Some(9),
        };
        assert_matches!(
            CreateRestaurantPizza::try_from(payload),
            Err(CoreError::Validation(_))
        );
    }
}
