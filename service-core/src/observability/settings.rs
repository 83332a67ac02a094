use std::path::Path;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging inputs that must be known before the subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl LogSettings {
    /// Load `.env` into the process environment, then read the settings.
    ///
    /// `RUST_LOG` from `.env` is picked up by the subscriber's `EnvFilter`
    /// because the file is loaded here first.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LogSettings::load`] with an explicit env file.
    pub fn load_from_file(path: &Path) -> Self {
        dotenvy::from_path(path).ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        Self {
            log_level: non_blank("APP__LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            otlp_endpoint: non_blank("OTLP_ENDPOINT"),
        }
    }
}
