//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
