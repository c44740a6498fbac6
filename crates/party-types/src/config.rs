//! Configuration types for the party service.
//!
//! `PartyConfig` represents the optional `party.toml` that controls the
//! listening address and logging. All fields have sensible defaults, so an
//! empty file (or no file at all) is a valid configuration.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartyConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Bridge tracing spans to OpenTelemetry (stdout exporter).
    #[serde(default)]
    pub otel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_config_default_values() {
        let config = PartyConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(!config.log.otel);
    }

    #[test]
    fn test_party_config_deserialize_empty() {
        let config: PartyConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(!config.log.otel);
    }

    #[test]
    fn test_party_config_deserialize_partial() {
        let toml_str = r#"
[server]
port = 9000

[log]
otel = true
"#;
        let config: PartyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert!(config.log.otel);
    }
}
