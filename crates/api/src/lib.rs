//! Pizza restaurants API server library.
//!
//! Exposes the building blocks (config, state, error handling, views,
//! routes, router) so integration tests and the binaries can share them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod views;
