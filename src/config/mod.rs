//! Tool configuration: the persisted file layout and where it lives.

mod ops;
mod store;


use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::platform::ToolCapability;

pub use store::{ConfigStore, FileStore, CONFIG_ENV};

/// Grace window used when the configuration does not name one.
pub const DEFAULT_GRACE: Duration = Duration::from_millis(500);

/// The persisted, user-editable tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolConfiguration {
    /// One command per editor role.
    pub editor: EditorCommands,
    /// Ordered terminal candidates.
    pub terminal: TerminalConfig,
    /// Launch timing.
    pub launch: LaunchConfig,
}

/// Configured command per editor role. Empty means "use the platform variants".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorCommands {
    /// Command for [`ToolCapability::PrimaryEditor`], e.g. `"cursor"`.
    pub primary: String,
    /// Command for [`ToolCapability::SecondaryEditor`], e.g. `"code"`.
    pub secondary: String,
    /// Command for [`ToolCapability::Ide`], e.g. `"idea"`.
    pub ide: String,
}

/// The `[terminal]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TerminalConfig {
    /// Terminal names tried in order.
    pub candidates: Vec<String>,
}

/// The `[launch]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// How long a freshly spawned candidate may take to report failure.
    #[serde(with = "humantime_serde")]
    pub grace: Duration,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            grace: DEFAULT_GRACE,
        }
    }
}

impl ToolConfiguration {
    /// The configured command for an editor role, or `None` when it is
    /// empty (use platform variants) or `capability` is the terminal role.
    pub fn editor_command(&self, capability: ToolCapability) -> Option<&str> {
        let command = match capability {
            ToolCapability::PrimaryEditor => &self.editor.primary,
            ToolCapability::SecondaryEditor => &self.editor.secondary,
            ToolCapability::Ide => &self.editor.ide,
            ToolCapability::Terminal => return None,
        };
        let command = command.trim();
        if command.is_empty() {
            None
        } else {
            Some(command)
        }
    }

    /// Replace the command for an editor role. Ignored for the terminal role.
    pub fn set_editor_command(&mut self, capability: ToolCapability, command: impl Into<String>) {
        let slot = match capability {
            ToolCapability::PrimaryEditor => &mut self.editor.primary,
            ToolCapability::SecondaryEditor => &mut self.editor.secondary,
            ToolCapability::Ide => &mut self.editor.ide,
            ToolCapability::Terminal => return,
        };
        *slot = command.into();
    }

    /// Configured editor commands, skipping empty ones.
    pub fn editor_commands(&self) -> impl Iterator<Item = (ToolCapability, &str)> {
        ToolCapability::EDITORS
            .into_iter()
            .filter_map(|capability| Some((capability, self.editor_command(capability)?)))
    }
}
