use service_core::config::{self as core_config, get_env_with};
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_INFERENCE_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL_NAME: &str = "llama3";
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 90;

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub common: core_config::Config,
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Full URL of the `/api/generate` endpoint.
    pub url: String,
    pub model: String,
    /// Upper bound on a single generation call.
    pub timeout: Duration,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_INFERENCE_URL.to_string(),
            model: DEFAULT_MODEL_NAME.to_string(),
            timeout: Duration::from_secs(DEFAULT_INFERENCE_TIMEOUT_SECS),
        }
    }
}

impl RecipeConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common = core_config::Config::load()?;
        let inference = InferenceConfig::from_lookup(|key| env::var(key).ok())?;

        Ok(RecipeConfig { common, inference })
    }
}

impl InferenceConfig {
    /// Builds the inference settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_prod = lookup("ENVIRONMENT").unwrap_or_else(|| "dev".to_string()) == "prod";

        let timeout_secs = get_env_with(
            &lookup,
            "INFERENCE_TIMEOUT_SECS",
            Some(&DEFAULT_INFERENCE_TIMEOUT_SECS.to_string()),
            is_prod,
        )?
        .trim()
        .parse::<u64>()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("INFERENCE_TIMEOUT_SECS is invalid: {}", e))
        })?;

        if timeout_secs == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "INFERENCE_TIMEOUT_SECS must be greater than zero"
            )));
        }

        Ok(InferenceConfig {
            url: get_env_with(&lookup, "OLLAMA_URL", Some(DEFAULT_INFERENCE_URL), is_prod)?,
            model: get_env_with(&lookup, "MODEL_NAME", Some(DEFAULT_MODEL_NAME), is_prod)?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
