use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    /// Loads `.env`, an optional `configuration` file and `APP__*` variables.
    /// A bare `PORT` variable wins over everything else.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", env::var("PORT").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Reads `key` through `lookup`, falling back to `default` outside production.
pub fn get_env_with<F>(
    lookup: &F,
    key: &str,
    default: Option<&str>,
    is_prod: bool,
) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => Ok(val),
        None => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn get_env_prefers_set_value() {
        let vars = HashMap::from([("MODEL_NAME", "mistral")]);
        let value = get_env_with(&lookup_from(&vars), "MODEL_NAME", Some("llama3"), false).unwrap();
        assert_eq!(value, "mistral");
    }

    #[test]
    fn get_env_falls_back_to_default_in_dev() {
        let vars = HashMap::new();
        let value = get_env_with(&lookup_from(&vars), "MODEL_NAME", Some("llama3"), false).unwrap();
        assert_eq!(value, "llama3");
    }

    #[test]
    fn get_env_requires_value_in_prod() {
        let vars = HashMap::new();
        let err =
            get_env_with(&lookup_from(&vars), "MODEL_NAME", Some("llama3"), true).unwrap_err();
        assert!(err.to_string().contains("MODEL_NAME is required in production"));
    }

    #[test]
    fn get_env_without_default_is_an_error() {
        let vars = HashMap::new();
        let err = get_env_with(&lookup_from(&vars), "OLLAMA_URL", None, false).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
