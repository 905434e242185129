use serde_json::Value;
use thiserror::Error;

/// Model output that did not decode as JSON.
#[derive(Debug, Error)]
#[error("model output is not valid JSON: {source}")]
pub struct ParseError {
    /// Untrimmed text as returned by the model.
    pub raw: String,
    #[source]
    pub source: serde_json::Error,
}

/// Decodes trimmed model output. Any JSON value is accepted; the recipe shape
/// is not checked.
pub fn parse_model_output(raw: String) -> Result<Value, ParseError> {
    match serde_json::from_str(raw.trim()) {
        Ok(value) => Ok(value),
        Err(source) => Err(ParseError { raw, source }),
    }
}
