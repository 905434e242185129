//! HTTP handlers for the recipe relay.

pub mod health;
pub mod recipes;

pub use health::{health_check, metrics_endpoint};
pub use recipes::generate_recipes;
