use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::infrastructure::avatar::{StrategyConfig, DEFAULT_URL_PREFIX};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub avatars: AvatarsConfig,
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

/// Avatar resolution settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AvatarsConfig {
    /// Directory holding uploaded avatars, one `<user id>.<ext>` file per user
    pub directory: PathBuf,
    /// URL path the directory is served under
    pub url_prefix: String,
    /// Strategies in resolution order
    pub strategies: Vec<StrategyConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
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

impl Default for AvatarsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("avatars"),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            strategies: StrategyConfig::default_chain(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load `default` and `local` files from `dir`, then `APP__*` overrides
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let config = config::Config::builder()
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join("local")).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.avatars.directory, PathBuf::from("avatars"));
        assert_eq!(config.avatars.url_prefix, "/avatars/");
        assert_eq!(config.avatars.strategies, StrategyConfig::default_chain());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"avatars": {"directory": "/srv/avatars", "strategies": [{"type": "direct_url"}]}}"#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.avatars.directory, PathBuf::from("/srv/avatars"));
        assert_eq!(config.avatars.url_prefix, "/avatars/");
        assert_eq!(config.avatars.strategies, vec![StrategyConfig::DirectUrl]);
    }

    fn write_config(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_load_from_reads_local_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        write_config(
            dir.path(),
            "local.toml",
            r#"
[avatars]
directory = "/srv/avatars"

[[avatars.strategies]]
type = "hashed"
source = "unique_id"
"#,
        );

        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.avatars.directory, PathBuf::from("/srv/avatars"));
        assert_eq!(
            config.avatars.strategies,
            vec![StrategyConfig::Hashed {
                source: crate::infrastructure::avatar::HashSource::UniqueId,
                base_url: crate::infrastructure::avatar::GRAVATAR_BASE_URL.to_string(),
            }]
        );
    }

    #[test]
    fn test_load_from_rejects_unknown_hash_source() {
        let dir = tempfile::TempDir::new().unwrap();
        write_config(
            dir.path(),
            "local.toml",
            r#"
[[avatars.strategies]]
type = "hashed"
source = "uniqe_id"
"#,
        );

        let err = AppConfig::load_from(dir.path()).unwrap_err();
        assert!(err.to_string().contains("uniqe_id"));
    }

    #[test]
    fn test_load_from_rejects_unknown_strategy_type() {
        let dir = tempfile::TempDir::new().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            r#"
[[avatars.strategies]]
type = "avatar_server"
"#,
        );

        assert!(AppConfig::load_from(dir.path()).is_err());
    }
}
