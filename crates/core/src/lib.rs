//! Domain types and business rules for the pizza restaurants service.
//!
//! This crate performs no I/O. Storage lives in `pizzeria_db`, HTTP in
//! `pizzeria_api`.

pub mod error;
pub mod restaurant_pizza;
pub mod types;
