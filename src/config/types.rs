//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::rooms::RoomsConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server information.
    pub server: ServerConfig,
    /// Room policy configuration.
    #[serde(default)]
    pub rooms: RoomsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Unrecognized enumeration values (e.g. an unknown encryption policy
    /// string) fail here, at startup, never per-request.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name (e.g., "hearth.example.com"). Becomes the domain part of
    /// room ids and generated aliases.
    pub name: String,
    /// Server description.
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EncryptionDefaultPolicy;
    use std::io::Write;

    fn load_from_str(content: &str) -> Result<Config, ConfigError> {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(content.as_bytes()).expect("write config");
        Config::load(file.path())
    }

    #[test]
    fn minimal_config_loads_with_defaults() {
        let config = load_from_str(
            r#"
            [server]
            name = "hearth.example.com"
            "#,
        )
        .expect("config should load");

        assert_eq!(config.server.name, "hearth.example.com");
        assert_eq!(
            config.rooms.encryption_enabled_by_default,
            EncryptionDefaultPolicy::Off
        );
    }

    #[test]
    fn encryption_policy_strings_parse() {
        for (value, expected) in [
            ("all", EncryptionDefaultPolicy::All),
            ("invite", EncryptionDefaultPolicy::InviteOnly),
            ("off", EncryptionDefaultPolicy::Off),
        ] {
            let config = load_from_str(&format!(
                r#"
                [server]
                name = "hearth.example.com"

                [rooms]
                encryption_enabled_by_default = "{value}"
                "#
            ))
            .expect("config should load");
            assert_eq!(config.rooms.encryption_enabled_by_default, expected);
        }
    }

    #[test]
    fn unknown_encryption_policy_fails_to_parse() {
        let result = load_from_str(
            r#"
            [server]
            name = "hearth.example.com"

            [rooms]
            encryption_enabled_by_default = "sometimes"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Config::load("/nonexistent/path/hearthd.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
