pub mod recipes;

pub use recipes::{HealthResponse, Nutrition, Recipe, RecipeCollection, RecipeRequest};
