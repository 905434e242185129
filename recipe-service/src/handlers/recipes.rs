use crate::error::RecipeError;
use crate::services::{
    build_recipe_prompt, is_json_content_type, parse_model_output, parse_recipe_request,
};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde_json::Value;

/// `POST /generate-recipes`
///
/// Validate, build the prompt, call the model once, and hand back whatever
/// JSON it produced. Bodies not sent as `application/json` are treated as empty.
pub async fn generate_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, RecipeError> {
    let body = if is_json_content_type(&headers) {
        body
    } else {
        tracing::debug!("Request body is not application/json, ignoring it");
        Bytes::new()
    };
    let request = parse_recipe_request(&body)?;
    let prompt = build_recipe_prompt(&request);

    tracing::info!(
        diet = %request.diet,
        protein = %request.protein,
        preferences = request.preferences.len(),
        model = %state.provider.model(),
        "Generating recipes"
    );

    let raw = state.provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(kind = e.kind(), error = %e, "Inference call failed");
        RecipeError::from(e)
    })?;

    let recipes = parse_model_output(raw).map_err(|e| {
        tracing::warn!(error = %e.source, raw_len = e.raw.len(), "Model returned non-JSON output");
        RecipeError::from(e)
    })?;

    Ok(Json(recipes))
}
