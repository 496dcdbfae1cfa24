use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Commands whose `{...}` argument is verbatim when the config does not say
/// otherwise.
pub const DEFAULT_VERBATIM_COMMANDS: &[&str] = &["type", "typ", "tex"];

pub const DEFAULT_MAX_NESTING: usize = 128;

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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replaces the built-in verbatim command list.
    pub verbatim_commands: Vec<String>,
    /// Added on top of `verbatim_commands`.
    pub extra_verbatim_commands: Vec<String>,
    /// How deep commands nested inside arguments are classified.
    pub max_nesting: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbatim_commands: DEFAULT_VERBATIM_COMMANDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extra_verbatim_commands: vec![],
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
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

        log::debug!("loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config file, falling back to defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_or_default_from_path(Self::config_path())
    }

    pub fn load_or_default_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        match Self::load_from_path(&config_path)? {
            Some(config) => Ok(config),
            None => {
                log::info!("no config at {}, using defaults", config_path.as_ref().display());
                Ok(Self::default())
            }
        }
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
        let config_dir = shellexpand::tilde("~/.config/context-scanner");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Every command name whose argument should be treated as verbatim.
    pub fn all_verbatim_commands(&self) -> impl Iterator<Item = &str> {
        self.verbatim_commands
            .iter()
            .chain(&self.extra_verbatim_commands)
            .map(String::as_str)
    }
}
