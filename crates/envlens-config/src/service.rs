use std::path::PathBuf;
use std::sync::Arc;

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {details}")]
    InvalidConfiguration { details: String },
}

/// Policy selecting which process environment variables enter the snapshot.
///
/// `All` is full passthrough; `AllowList` only admits explicitly named keys.
/// Key comparison is case-insensitive, matching how variable names are
/// classified everywhere else in the system.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "mode", content = "keys", rename_all = "kebab-case")]
pub enum ExposurePolicy {
    All,
    AllowList(Vec<String>),
}

impl ExposurePolicy {
    /// Build an allow-list policy from a comma-separated key list.
    pub fn allow_list_from_str(keys: &str) -> Result<Self, ConfigError> {
        let keys: Vec<String> = keys
            .split(',')
            .map(|k| k.trim().to_uppercase())
            .filter(|k| !k.is_empty())
            .collect();

        if keys.is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                details: "allow-list exposure policy requires at least one key".to_string(),
            });
        }

        Ok(ExposurePolicy::AllowList(keys))
    }

    /// Whether a variable with this key may enter the snapshot.
    pub fn admits(&self, key: &str) -> bool {
        match self {
            ExposurePolicy::All => true,
            ExposurePolicy::AllowList(keys) => {
                let upper = key.to_uppercase();
                keys.iter().any(|k| *k == upper)
            }
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            ExposurePolicy::All => "all",
            ExposurePolicy::AllowList(_) => "allow-list",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub address: String,

    /// Which process environment variables the snapshot exposes
    pub exposure: ExposurePolicy,

    /// Optional dotenv file loaded before the snapshot is captured
    pub env_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a new configuration from serve-command inputs.
    pub fn new(
        address: String,
        expose_only: Option<String>,
        env_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let exposure = match expose_only {
            Some(keys) => ExposurePolicy::allow_list_from_str(&keys)?,
            None => ExposurePolicy::All,
        };

        Ok(ServerConfig {
            address,
            exposure,
            env_file,
        })
    }
}

/// Service that provides centralized access to the server configuration
pub struct ConfigService {
    config: Arc<ServerConfig>,
}

impl ConfigService {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self { config }
    }

    pub fn get_server_config(&self) -> Arc<ServerConfig> {
        self.config.clone()
    }

    pub fn exposure_policy(&self) -> &ExposurePolicy {
        &self.config.exposure
    }

    pub fn bind_address(&self) -> &str {
        &self.config.address
    }

    pub fn env_file(&self) -> Option<&PathBuf> {
        self.config.env_file.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_passthrough_admits_everything() {
        let policy = ExposurePolicy::All;
        assert!(policy.admits("DATABASE_URL"));
        assert!(policy.admits("anything_at_all"));
    }

    #[test]
    fn allow_list_is_case_insensitive() {
        let policy = ExposurePolicy::allow_list_from_str("database_url, API_KEY").unwrap();
        assert!(policy.admits("DATABASE_URL"));
        assert!(policy.admits("api_key"));
        assert!(!policy.admits("HOME"));
    }

    #[test]
    fn empty_allow_list_is_rejected() {
        assert!(ExposurePolicy::allow_list_from_str(" , ").is_err());
    }

    #[test]
    fn config_defaults_to_full_passthrough() {
        let config = ServerConfig::new("127.0.0.1:3000".to_string(), None, None).unwrap();
        assert_eq!(config.exposure, ExposurePolicy::All);
    }
}
