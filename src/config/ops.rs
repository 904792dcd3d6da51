use anyhow::{Context, Result};

use super::ToolConfiguration;
use crate::platform::ToolCapability;

impl ToolConfiguration {
    /// Get a config value by dot-separated key path
    ///
    /// # Errors
    /// Returns an error for unknown keys.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "terminal.candidates" => Ok(self.terminal.candidates.join(", ")),
            "launch.grace" => Ok(humantime::format_duration(self.launch.grace).to_string()),
            _ => {
                let capability = editor_key(key)?;
                Ok(self.editor_command(capability).unwrap_or_default().to_string())
            }
        }
    }

    /// Set a config value by dot-separated key path
    ///
    /// # Errors
    /// Returns an error for unknown keys or unparsable values.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "terminal.candidates" => {
                self.terminal.candidates = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(ToString::to_string)
                    .collect();
            }
            "launch.grace" => {
                self.launch.grace = humantime::parse_duration(value.trim())
                    .with_context(|| format!("Invalid duration: {value}"))?;
            }
            _ => {
                let capability = editor_key(key)?;
                self.set_editor_command(capability, value.trim());
            }
        }
        Ok(())
    }
}

fn editor_key(key: &str) -> Result<ToolCapability> {
    ToolCapability::EDITORS
        .into_iter()
        .find(|capability| key.strip_prefix("editor.") == Some(capability.key()))
        .with_context(|| format!("Unknown config key: {key}"))
}
