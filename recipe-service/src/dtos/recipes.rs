use serde::{Deserialize, Serialize};

/// Body of `POST /generate-recipes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub diet: String,
    pub protein: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferences: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub research: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Shape the model is asked to produce. The relay passes model output through
/// untouched; these types are for consumers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCollection {
    pub category: String,
    pub protein: String,
    pub meal_type: String,
    pub research_summary: String,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: String,
    pub protein_g: String,
    pub fat_g: String,
    pub carbs_g: String,
    pub vitamins: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub llama_model: String,
}
