//! Configuration loader.
//!
//! Reads an optional TOML file and deserializes it into [`PartyConfig`].
//! Without a path the defaults are used; an explicit path that cannot be
//! read or parsed is an error.
//!
//! Runs before the tracing subscriber exists, so it reports through its
//! return value only.

use std::path::Path;

use party_types::config::PartyConfig;
use party_types::error::ConfigError;

/// Load configuration from `path`, or return defaults when `path` is `None`.
pub async fn load_config(path: Option<&Path>) -> Result<PartyConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(PartyConfig::default());
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

    toml::from_str::<PartyConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}
