//! Errors surfaced by the launch path.
//!
//! Only whole-request failures live here. A single candidate failing to
//! start is a [`crate::launcher::StartError`] and is consumed by the
//! launcher's fallback loop.

use std::path::PathBuf;

use thiserror::Error;

use crate::platform::ToolCapability;

/// Failure of a launch request, or of resolving the host platform.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The target directory is missing at launch time. No candidate was probed.
    #[error("directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Every candidate was absent or failed to start.
    #[error("no working command among: {}", .attempted.join(", "))]
    NoWorkingCommand {
        /// The role that was being launched.
        capability: ToolCapability,
        /// Every candidate considered, in the order they were tried.
        attempted: Vec<String>,
    },

    /// The host OS has no profile.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
}
