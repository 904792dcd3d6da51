//! Open project directories in whichever editor or terminal this machine
//! actually has, trying configured candidates in order and repairing the
//! configuration when it names tools the platform does not support.

pub mod app;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
/// Host platform and launchable roles.
pub mod platform;
pub mod profile;
pub mod resolver;
pub mod validator;

#[cfg(test)]
mod testing;

pub use app::App;
pub use config::ToolConfiguration;
pub use error::LaunchError;
pub use launcher::{LaunchResult, Launcher};
pub use platform::{HostPlatform, ToolCapability};
pub use profile::PlatformProfile;
