use crate::services::{ParseError, ProviderError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "diet and protein fields are required.";
pub const INVALID_JSON_MESSAGE: &str = "LLM did not return valid JSON";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate recipes";

/// Terminal outcomes of a `/generate-recipes` call other than success.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("diet and protein fields are required.")]
    Validation,

    #[error("Failed to generate recipes: {0}")]
    Upstream(ProviderError),

    /// The endpoint answered 2xx but carried no usable model text.
    #[error("LLM did not return valid JSON: {0}")]
    MissingModelOutput(String),

    #[error("LLM did not return valid JSON")]
    InvalidModelOutput(#[from] ParseError),
}

impl From<ProviderError> for RecipeError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidResponse(detail) => RecipeError::MissingModelOutput(detail),
            other => RecipeError::Upstream(other),
        }
    }
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        match self {
            RecipeError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": VALIDATION_MESSAGE })),
            )
                .into_response(),
            RecipeError::Upstream(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": GENERATION_FAILED_MESSAGE,
                    "detail": err.to_string(),
                })),
            )
                .into_response(),
            RecipeError::MissingModelOutput(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": INVALID_JSON_MESSAGE })),
            )
                .into_response(),
            RecipeError::InvalidModelOutput(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": INVALID_JSON_MESSAGE,
                    "raw": err.raw,
                })),
            )
                .into_response(),
        }
    }
}
