use std::fmt;
use std::str::FromStr;

use crate::error::LaunchError;

/// The operating systems that have a [`crate::profile::PlatformProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    MacOs,
    /// Linux and its desktop environments.
    Linux,
}

impl HostPlatform {
    /// Every supported platform, in no particular priority.
    pub const ALL: [Self; 3] = [Self::Windows, Self::MacOs, Self::Linux];

    /// The platform this process is running on.
    ///
    /// # Errors
    /// Returns [`LaunchError::UnsupportedPlatform`] on any other OS.
    pub fn current() -> Result<Self, LaunchError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` identifier to a platform.
    ///
    /// # Errors
    /// Returns [`LaunchError::UnsupportedPlatform`] for unknown identifiers.
    pub fn from_os(os: &str) -> Result<Self, LaunchError> {
        match os {
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            other => Err(LaunchError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A launchable role. Every role but [`ToolCapability::Terminal`] takes a
/// single configured command; the terminal role takes an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCapability {
    /// The preferred editor (Cursor by default).
    PrimaryEditor,
    /// The fallback editor (VS Code by default).
    SecondaryEditor,
    /// The full IDE (IntelliJ IDEA by default).
    Ide,
    /// A terminal emulator opened at the directory.
    Terminal,
}

impl ToolCapability {
    /// All non-terminal roles, in configuration order.
    pub const EDITORS: [Self; 3] = [Self::PrimaryEditor, Self::SecondaryEditor, Self::Ide];

    /// Every role.
    pub const ALL: [Self; 4] = [
        Self::PrimaryEditor,
        Self::SecondaryEditor,
        Self::Ide,
        Self::Terminal,
    ];

    /// Whether this is the terminal role.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal)
    }

    /// Key used in the configuration file and on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Self::PrimaryEditor => "primary",
            Self::SecondaryEditor => "secondary",
            Self::Ide => "ide",
            Self::Terminal => "terminal",
        }
    }
}

impl fmt::Display for ToolCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PrimaryEditor => "primary editor",
            Self::SecondaryEditor => "secondary editor",
            Self::Ide => "IDE",
            Self::Terminal => "terminal",
        })
    }
}

impl FromStr for ToolCapability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primary" | "primary-editor" | "editor" | "cursor" => Ok(Self::PrimaryEditor),
            "secondary" | "secondary-editor" | "vscode" | "code" => Ok(Self::SecondaryEditor),
            "ide" | "idea" => Ok(Self::Ide),
            "terminal" | "term" => Ok(Self::Terminal),
            _ => Err(format!(
                "unknown tool '{s}' (expected primary, secondary, ide or terminal)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os() {
        assert_eq!(HostPlatform::from_os("linux").unwrap(), HostPlatform::Linux);
        assert_eq!(HostPlatform::from_os("macos").unwrap(), HostPlatform::MacOs);
        assert_eq!(
            HostPlatform::from_os("windows").unwrap(),
            HostPlatform::Windows
        );
        let err = HostPlatform::from_os("freebsd").unwrap_err();
        assert!(matches!(err, LaunchError::UnsupportedPlatform(ref os) if os == "freebsd"));
    }

    #[test]
    fn test_capability_parse_aliases() {
        assert_eq!(
            "cursor".parse::<ToolCapability>().unwrap(),
            ToolCapability::PrimaryEditor
        );
        assert_eq!(
            "Secondary".parse::<ToolCapability>().unwrap(),
            ToolCapability::SecondaryEditor
        );
        assert_eq!("idea".parse::<ToolCapability>().unwrap(), ToolCapability::Ide);
        assert_eq!(
            "terminal".parse::<ToolCapability>().unwrap(),
            ToolCapability::Terminal
        );
        assert!("emacs".parse::<ToolCapability>().is_err());
    }

    #[test]
    fn test_editors_exclude_terminal() {
        assert!(ToolCapability::EDITORS.iter().all(|c| !c.is_terminal()));
        assert!(ToolCapability::Terminal.is_terminal());
    }
}
