use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// What loading a file should do with lines already in the buffer.
/// Mirrors the engine's load modes; the shell maps between the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    #[default]
    Replace,
    Append,
}

fn default_undo_streak_limit() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// How many undos may run back-to-back before a mutation or redo is
    /// required.
    #[serde(default = "default_undo_streak_limit")]
    pub undo_streak_limit: usize,
    /// Whether loading a file replaces or appends to the current buffer.
    #[serde(default)]
    pub load_mode: LoadMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            undo_streak_limit: default_undo_streak_limit(),
            load_mode: LoadMode::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/linedit");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_path_expands_tilde() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/linedit/config.toml"));
    }

    #[test]
    fn default_config_uses_three_undos_and_replace() {
        let config = Config::default();
        assert_eq!(config.undo_streak_limit, 3);
        assert_eq!(config.load_mode, LoadMode::Replace);
    }

    #[test]
    fn serialization_round_trips() {
        let original = Config {
            undo_streak_limit: 5,
            load_mode: LoadMode::Append,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.undo_streak_limit, deserialized.undo_streak_limit);
        assert_eq!(original.load_mode, deserialized.load_mode);
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let config: Config = toml::from_str("undo_streak_limit = 7\n").unwrap();
        assert_eq!(config.undo_streak_limit, 7);
        assert_eq!(config.load_mode, LoadMode::Replace);

        let config: Config = toml::from_str("load_mode = \"append\"\n").unwrap();
        assert_eq!(config.undo_streak_limit, 3);
        assert_eq!(config.load_mode, LoadMode::Append);
    }

    #[test]
    fn empty_config_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.undo_streak_limit, 3);
        assert_eq!(config.load_mode, LoadMode::Replace);
    }

    #[test]
    fn missing_config_file_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "undo_streak_limit = \"not a number\"").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            undo_streak_limit: 10,
            load_mode: LoadMode::Append,
        };

        // Test saving
        test_config.save_to_path(&config_file).unwrap();

        // Test loading
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.undo_streak_limit, 10);
        assert_eq!(loaded_config.load_mode, LoadMode::Append);
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config::default();

        test_config.save_to_path(&config_file).unwrap();

        assert!(config_file.exists(), "Config file should exist");
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded_config.undo_streak_limit, 3);
    }
}
