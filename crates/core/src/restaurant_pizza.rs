//! Business rules for restaurant/pizza associations.
//!
//! An association links one restaurant to one pizza at a price. The price
//! range is enforced here and again by a CHECK constraint on the
//! `restaurant_pizzas` table; keep the two in sync.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Lowest accepted price (inclusive).
pub const MIN_PRICE: i32 = 1;

/// Highest accepted price (inclusive).
pub const MAX_PRICE: i32 = 30;

/* --------------------------------------------------------------------------
   Payload
   -------------------------------------------------------------------------- */

/// Untrusted body of `POST /restaurant_pizzas`.
///
/// Every field is optional so that a missing key and an explicit `null`
/// both deserialize and are rejected by [`Validate`] instead of by serde.
/// `price` also takes a float with no fractional part (`5.0`).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RestaurantPizzaPayload {
    #[serde(default, deserialize_with = "whole_number")]
    #[validate(required, range(min = MIN_PRICE, max = MAX_PRICE))]
    pub price: Option<i32>,
    #[validate(required)]
    pub pizza_id: Option<DbId>,
    #[validate(required)]
    pub restaurant_id: Option<DbId>,
}

impl RestaurantPizzaPayload {
    /// Check presence of all fields and the price range.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))
    }
}

/// Accept a JSON integer or an integral float as an `i32`.
fn whole_number<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Int(i64),
        Float(f64),
    }

    match Option::<Numeric>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Numeric::Int(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("integer {n} out of range"))),
        Some(Numeric::Float(f))
            if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) =>
        {
            Ok(Some(f as i32))
        }
        Some(Numeric::Float(f)) => Err(D::Error::custom(format!("{f} is not a whole number"))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
