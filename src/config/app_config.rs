use std::time::Duration;

use serde::Deserialize;

/// Default base URL of the RIO LOD API (v2)
pub const DEFAULT_RIO_BASE_URL: &str = "https://lod.onderwijsregistratie.nl/api/rio/v2";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub rio: RioConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Upstream RIO LOD API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RioConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Static presentation layer settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for RioConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RIO_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl RioConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            static_dir: "public".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;

        // Container platforms hand out the listening port as a bare PORT variable
        if let Some(port) = port_from_env(std::env::var("PORT").ok().as_deref())? {
            app_config.server.port = port;
        }

        Ok(app_config)
    }
}

fn port_from_env(value: Option<&str>) -> Result<Option<u16>, config::ConfigError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(|e| config::ConfigError::Message(format!("Invalid PORT '{}': {}", raw, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_rio_v2() {
        let config = AppConfig::default();

        assert_eq!(config.rio.base_url, DEFAULT_RIO_BASE_URL);
        assert_eq!(config.rio.timeout(), Duration::from_secs(10));
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.ui.static_dir, "public");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("rio.timeout_secs", 3)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.rio.timeout_secs, 3);
        assert_eq!(config.rio.base_url, DEFAULT_RIO_BASE_URL);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_port_from_env() {
        assert_eq!(port_from_env(None).unwrap(), None);
        assert_eq!(port_from_env(Some("")).unwrap(), None);
        assert_eq!(port_from_env(Some("9090")).unwrap(), Some(9090));
        assert!(port_from_env(Some("not-a-port")).is_err());
    }
}
