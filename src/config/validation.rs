//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early. Any
//! error here must prevent the server from starting; policy values that
//! fail deserialization never reach this point.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("server.name must be a bare domain, got '{0}'")]
    InvalidServerName(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    } else if config
        .server
        .name
        .chars()
        .any(|c| c.is_whitespace() || c == ':' || c == '#' || c == '!')
    {
        // The server name becomes the domain part of room ids and aliases,
        // so id sigils and separators cannot appear in it.
        errors.push(ValidationError::InvalidServerName(
            config.server.name.clone(),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RoomsConfig, ServerConfig};

    fn config_with_name(name: &str) -> Config {
        Config {
            server: ServerConfig {
                name: name.to_string(),
                description: None,
            },
            rooms: RoomsConfig::default(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(validate(&config_with_name("hearth.example.com")).is_ok());
    }

    #[test]
    fn empty_server_name_is_rejected() {
        let errors = validate(&config_with_name("")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::MissingServerName));
    }

    #[test]
    fn server_name_with_sigils_is_rejected() {
        let errors = validate(&config_with_name("hearth:8448")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidServerName(_)));
    }
}
