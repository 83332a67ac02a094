use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load base settings from `.env`, an optional `configuration` file,
    /// `APP__*` variables and finally the plain `PORT` variable.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::with_port_override(std::env::var("PORT").ok())
    }

    pub fn with_port_override(port: Option<String>) -> Result<Self, AppError> {
        let port = port.filter(|p| !p.trim().is_empty());

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_override_takes_precedence() {
        let config = Config::with_port_override(Some("9191".to_string())).unwrap();
        assert_eq!(config.port, 9191);
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let result = Config::with_port_override(Some("not-a-port".to_string()));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
