use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default Gemini model for advisory replies.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

/// Public Gemini REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_DEPLOYMENT_LABEL: &str = "Railway";

#[derive(Debug, Clone)]
pub struct TradeConnectConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub deployment: DeploymentConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model used for every advisory reply (e.g., gemini-2.0-flash)
    pub text_model: String,
    pub api_base_url: String,
}

#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    /// Reported by the liveness endpoint.
    pub label: String,
    /// Browser origins allowed to call the API. Empty disables CORS.
    pub cors_allowed_origins: Vec<String>,
}

impl TradeConnectConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(TradeConnectConfig {
            common,
            google: GoogleConfig {
                api_key: Secret::new(get_env(&lookup, "GOOGLE_API_KEY", None)?),
            },
            models: ModelConfig {
                text_model: get_env(&lookup, "GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL))?,
                api_base_url: get_env(&lookup, "GENAI_API_BASE_URL", Some(DEFAULT_API_BASE_URL))?,
            },
            deployment: DeploymentConfig {
                label: get_env(&lookup, "DEPLOYMENT_LABEL", Some(DEFAULT_DEPLOYMENT_LABEL))?,
                cors_allowed_origins: get_env(&lookup, "CORS_ALLOWED_ORIGINS", Some(""))?
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        })
    }
}

// Blank values count as unset.
fn get_env<F>(lookup: &F, key: &str, default: Option<&str>) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|val| !val.trim().is_empty()) {
        Some(val) => Ok(val),
        None => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}
