use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::ToolConfiguration;

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV: &str = "DIRLAUNCH_CONFIG";

/// Where the tool configuration is persisted.
pub trait ConfigStore {
    /// Read the stored configuration. A store with nothing saved yet yields
    /// the platform defaults.
    ///
    /// # Errors
    /// Returns an error when stored data exists but cannot be read or parsed.
    fn load(&self) -> Result<ToolConfiguration>;

    /// Persist `config`, replacing whatever was stored.
    ///
    /// # Errors
    /// Returns an error when the data cannot be written.
    fn save(&self, config: &ToolConfiguration) -> Result<()>;
}

/// TOML file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    defaults: ToolConfiguration,
}

impl FileStore {
    /// Store at `path`; `defaults` is returned while the file does not exist.
    pub fn new(path: impl Into<PathBuf>, defaults: ToolConfiguration) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }

    /// `$DIRLAUNCH_CONFIG`, or `~/.config/dirlaunch/config.toml`.
    ///
    /// # Errors
    /// Returns an error when the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("dirlaunch").join("config.toml"))
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> Result<ToolConfiguration> {
        if !self.path.exists() {
            return Ok(self.defaults.clone());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config from {}", self.path.display()))?;
        let config: ToolConfiguration = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &ToolConfiguration) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(config)
            .context("Failed to serialize config")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config to {}", self.path.display()))?;
        Ok(())
    }
}
