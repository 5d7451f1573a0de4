use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "todoql.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Route serving GraphQL requests.
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_path() -> String {
    "/graphql".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Connection string; the scheme selects the backend.
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_database")]
    pub database: String,
}

fn default_uri() -> String {
    "mongodb://127.0.0.1:27017".to_string()
}

fn default_database() -> String {
    "graphql".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            database: default_database(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL announced once the listener is up.
    pub fn endpoint_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" => "localhost",
            other => other,
        };
        format!("http://{}:{}{}", host, self.port, self.path)
    }
}

impl GatewayConfig {
    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] in `cwd` when present.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file yields the built-in defaults.
    pub fn load(path: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(GatewayError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    return Ok((Self::default(), None));
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&config_path)?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok((config, Some(config_path)))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.server.path.starts_with('/') {
            return Err(GatewayError::Config(format!(
                "server.path must start with '/', got '{}'",
                self.server.path
            )));
        }
        if self.store.database.is_empty() {
            return Err(GatewayError::Config(
                "store.database cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.path, "/graphql");
        assert_eq!(config.store.uri, "mongodb://127.0.0.1:27017");
        assert_eq!(config.store.database, "graphql");
        assert_eq!(
            config.server.endpoint_url(),
            "http://localhost:4000/graphql"
        );
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = GatewayConfig::from_toml(
            r#"
            [store]
            uri = "memory://"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.uri, "memory://");
        assert_eq!(config.store.database, "graphql");
        assert_eq!(config.server, ServerSettings::default());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let (config, path) = GatewayConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert!(path.is_none());
    }

    #[test]
    fn test_load_default_file_from_cwd() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            "[server]\nport = 8080\n",
        )
        .unwrap();

        let (config, path) = GatewayConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(path.is_some());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = GatewayConfig::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_relative_path() {
        let mut config = GatewayConfig::default();
        config.server.path = "graphql".to_string();
        assert!(config.validate().is_err());
    }
}
