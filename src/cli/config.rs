//! Service configuration
//!
//! Loaded from an optional JSON file; every field has a default.
//!
//! ```json
//! { "data_file": "output.txt", "http": { "host": "0.0.0.0", "port": 8080 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;

/// Config file consulted when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./admediation.json";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Data file holding the record array (default: "output.txt")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("output.txt")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must load. Without one, the default path is used if
    /// it exists, otherwise built-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command line overrides, then re-validate
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        port: Option<u16>,
    ) -> CliResult<Self> {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("http.host must not be empty"));
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
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("output.txt"));
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("admediation.json");
        fs::write(&path, r#"{"http": {"port": 9090}}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("output.txt"));
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.http.host, "0.0.0.0");
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        let result = Config::resolve(Some(missing.as_path()));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_json_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("admediation.json");
        fs::write(&path, "port = 1").unwrap();

        assert!(matches!(Config::load(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_zero_port_rejected() {
        let result = Config::default().with_overrides(None, Some(0));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_overrides_apply() {
        let config = Config::default()
            .with_overrides(Some(PathBuf::from("data.json")), Some(3000))
            .unwrap();
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.http.port, 3000);
    }
}
