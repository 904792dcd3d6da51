//! Static per-platform knowledge: which editors and terminals are plausible
//! and how each one is told to open a directory.

mod terminals;


use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use crate::config::ToolConfiguration;
use crate::error::LaunchError;
use crate::platform::{HostPlatform, ToolCapability};

pub use terminals::TerminalRule;

/// A fully built command line for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path as configured. The launcher resolves it before spawning.
    pub program: String,
    /// Arguments in order. The directory is carried byte for byte.
    pub args: Vec<OsString>,
    /// Route through the platform command interpreter (`cmd /C` on Windows).
    pub use_shell: bool,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

struct Table {
    primary: &'static [&'static str],
    secondary: &'static [&'static str],
    ide: &'static [&'static str],
    /// Defaults for primary, secondary, ide. Each must appear in its variant list.
    default_editors: [&'static str; 3],
    default_terminals: &'static [&'static str],
    terminals: &'static [TerminalRule],
}

const WINDOWS: Table = Table {
    primary: &["cursor.exe", "cursor"],
    secondary: &["code.exe", "code"],
    ide: &["idea64.exe", "idea64", "idea.exe", "idea"],
    default_editors: ["cursor", "code", "idea64"],
    default_terminals: &["wt", "cmd", "powershell"],
    terminals: terminals::WINDOWS,
};

const MACOS: Table = Table {
    primary: &["cursor", "/Applications/Cursor.app/Contents/MacOS/Cursor"],
    secondary: &[
        "code",
        "/Applications/Visual Studio Code.app/Contents/MacOS/Electron",
    ],
    ide: &["idea", "/Applications/IntelliJ IDEA.app/Contents/MacOS/idea"],
    default_editors: ["cursor", "code", "idea"],
    default_terminals: &[
        "open -a Terminal",
        "open -a iTerm",
        "open -a Alacritty",
        "open -a Kitty",
    ],
    terminals: terminals::MACOS,
};

const LINUX: Table = Table {
    primary: &["cursor"],
    secondary: &["code", "code-insiders"],
    ide: &["idea", "intellij-idea-ultimate", "intellij-idea-community"],
    default_editors: ["cursor", "code", "idea"],
    default_terminals: &[
        "gnome-terminal",
        "konsole",
        "xfce4-terminal",
        "alacritty",
        "kitty",
        "xterm",
    ],
    terminals: terminals::LINUX,
};

/// Lookup table for one [`HostPlatform`]. Built once, never mutated.
#[derive(Clone, Copy)]
pub struct PlatformProfile {
    platform: HostPlatform,
    table: &'static Table,
}

impl fmt::Debug for PlatformProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformProfile")
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

impl PlatformProfile {
    /// Profile for an explicit platform.
    pub fn new(platform: HostPlatform) -> Self {
        let table = match platform {
            HostPlatform::Windows => &WINDOWS,
            HostPlatform::MacOs => &MACOS,
            HostPlatform::Linux => &LINUX,
        };
        Self { platform, table }
    }

    /// Profile for the running OS.
    ///
    /// # Errors
    /// Returns [`LaunchError::UnsupportedPlatform`] when the OS has no table.
    pub fn current() -> Result<Self, LaunchError> {
        HostPlatform::current().map(Self::new)
    }

    /// The platform this profile describes.
    pub const fn platform(&self) -> HostPlatform {
        self.platform
    }

    /// Known terminal names, in preference order.
    pub fn supported_terminals(&self) -> Vec<&'static str> {
        self.table.terminals.iter().map(|rule| rule.name).collect()
    }

    /// Acceptable executable names or paths for an editor role. Empty for
    /// [`ToolCapability::Terminal`], which is described by
    /// [`Self::supported_terminals`] instead.
    pub const fn supported_editor_variants(&self, capability: ToolCapability) -> &'static [&'static str] {
        match capability {
            ToolCapability::PrimaryEditor => self.table.primary,
            ToolCapability::SecondaryEditor => self.table.secondary,
            ToolCapability::Ide => self.table.ide,
            ToolCapability::Terminal => &[],
        }
    }

    /// Default command for an editor role.
    pub const fn default_editor(&self, capability: ToolCapability) -> Option<&'static str> {
        match capability {
            ToolCapability::PrimaryEditor => Some(self.table.default_editors[0]),
            ToolCapability::SecondaryEditor => Some(self.table.default_editors[1]),
            ToolCapability::Ide => Some(self.table.default_editors[2]),
            ToolCapability::Terminal => None,
        }
    }

    /// Default ordered terminal list written into a fresh configuration.
    pub fn default_terminals(&self) -> Vec<String> {
        self.table
            .default_terminals
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Starting configuration for a first run on this platform.
    pub fn default_configuration(&self) -> ToolConfiguration {
        let mut config = ToolConfiguration::default();
        for capability in ToolCapability::EDITORS {
            if let Some(default) = self.default_editor(capability) {
                config.set_editor_command(capability, default);
            }
        }
        config.terminal.candidates = self.default_terminals();
        config
    }

    /// Rule for a known terminal name.
    pub fn terminal_rule(&self, name: &str) -> Option<&'static TerminalRule> {
        self.table.terminals.iter().find(|rule| rule.name == name)
    }

    /// Invocation that opens terminal `name` at `dir`. Names without a rule
    /// get the platform's generic form.
    pub fn terminal_invocation(&self, name: &str, dir: &Path) -> Invocation {
        self.terminal_rule(name).map_or_else(
            || terminals::fallback(self.platform, name, dir),
            |rule| rule.invocation(dir),
        )
    }

    /// Invocation for an editor candidate: the directory is its sole argument.
    pub fn editor_invocation(&self, candidate: &str, dir: &Path) -> Invocation {
        Invocation {
            program: candidate.to_string(),
            args: vec![dir.as_os_str().to_os_string()],
            use_shell: false,
        }
    }

    /// Invocation for any role. `candidate` is an editor command for editor
    /// roles and a terminal name for the terminal role.
    pub fn invocation(&self, capability: ToolCapability, candidate: &str, dir: &Path) -> Invocation {
        if capability.is_terminal() {
            self.terminal_invocation(candidate, dir)
        } else {
            self.editor_invocation(candidate, dir)
        }
    }
}
