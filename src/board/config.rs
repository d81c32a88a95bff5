use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Environment variable naming a JSON file with a [`BoardConfig`].
pub const CONFIG_PATH_VAR: &str = "ORDER_BOARD_CONFIG";

/// Runtime settings of an [`OrderBoard`](crate::board::OrderBoard).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Capacity of the request channel. When it is full, client calls wait and
    /// card selections are dropped with a warning.
    pub buffer_size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

/// Errors reading a [`BoardConfig`] file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl BoardConfig {
    /// Reads a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Reads the file named by `ORDER_BOARD_CONFIG`, or the defaults when it is unset.
    pub fn from_env_or_default() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(&path),
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: BoardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BoardConfig::default());

        let config: BoardConfig = serde_json::from_str(r#"{"buffer_size": 4}"#).unwrap();
        assert_eq!(config.buffer_size, 4);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"buffer_size": 8}}"#).unwrap();

        let path = file.path().to_str().unwrap();
        let config = BoardConfig::from_file(path).unwrap();
        assert_eq!(config.buffer_size, 8);
    }

    #[test]
    fn test_from_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "buffer_size = 8").unwrap();
        let path = file.path().to_str().unwrap();
        assert!(matches!(
            BoardConfig::from_file(path),
            Err(ConfigError::Parse { .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            BoardConfig::from_file(missing.to_str().unwrap()),
            Err(ConfigError::Read { .. })
        ));
    }
}
