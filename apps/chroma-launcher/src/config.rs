use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LaunchError, Result};

pub const DEFAULT_EXECUTABLE: &str = "chroma";
pub const EXECUTABLE_ENV: &str = "CHROMA_EXECUTABLE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub executable: String,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            log_level: None,
        }
    }
}

impl Config {
    /// Loads `explicit` if given, otherwise the global config file, then
    /// applies environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) if !path.exists() => {
                return Err(LaunchError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            Some(path) => Self::load_file(path)?,
            None => Self::load_global()?,
        };
        Ok(config.with_env_overrides())
    }

    pub fn global_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "chroma-launcher").map_or_else(
            || PathBuf::from("~/.config/chroma-launcher"),
            |d| d.config_dir().to_path_buf(),
        )
        .join("config.toml")
    }

    fn load_global() -> Result<Self> {
        let config_path = Self::global_path();

        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LaunchError::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&content)
            .map_err(|e| LaunchError::Config(format!("{}: {e}", path.display())))
    }

    fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Self {
        self.with_executable_override(std::env::var(EXECUTABLE_ENV).ok())
    }

    fn with_executable_override(mut self, executable: Option<String>) -> Self {
        if let Some(executable) = executable.filter(|e| !e.is_empty()) {
            self.executable = executable;
        }
        self
    }
}
