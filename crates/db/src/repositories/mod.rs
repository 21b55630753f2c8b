//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod pizza_repo;
pub mod restaurant_pizza_repo;
pub mod restaurant_repo;

pub use pizza_repo::PizzaRepo;
pub use restaurant_pizza_repo::RestaurantPizzaRepo;
pub use restaurant_repo::RestaurantRepo;
