//! Answers "does this command exist here?" and "which variants does this
//! platform support for a role?".

mod path;


use std::ffi::OsString;
use std::path::PathBuf;

use tracing::trace;

use crate::platform::ToolCapability;
use crate::profile::PlatformProfile;

pub use path::augmented_path;

/// Resolves a program name to an executable.
pub trait CommandLookup {
    /// Full path of the executable `name` refers to, if any. Bare names are
    /// searched on the lookup path; absolute paths must exist and be
    /// executable. Never fails: anything unresolvable is `None`.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// [`CommandLookup`] over the process `PATH` (plus [`augmented_path`]'s
/// extras), honouring `PATHEXT` on Windows.
#[derive(Debug, Clone)]
pub struct PathLookup {
    search_path: OsString,
    cwd: PathBuf,
}

impl PathLookup {
    /// Lookup over the current environment.
    pub fn from_env() -> Self {
        Self::new(augmented_path())
    }

    /// Lookup over an explicit search path.
    pub fn new(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: search_path.into(),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl Default for PathLookup {
    fn default() -> Self {
        Self::from_env()
    }
}

impl CommandLookup for PathLookup {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let found = which::which_in(name, Some(&self.search_path), &self.cwd).ok();
        trace!(name, found = ?found, "resolved command");
        found
    }
}

/// Platform profile plus a [`CommandLookup`].
#[derive(Debug, Clone)]
pub struct CapabilityResolver<L = PathLookup> {
    profile: PlatformProfile,
    lookup: L,
}

impl<L: CommandLookup> CapabilityResolver<L> {
    /// Resolver for `profile` probing through `lookup`.
    pub const fn new(profile: PlatformProfile, lookup: L) -> Self {
        Self { profile, lookup }
    }

    /// The platform table this resolver answers from.
    pub const fn profile(&self) -> &PlatformProfile {
        &self.profile
    }

    /// The underlying lookup.
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Whether `name` resolves to an executable.
    pub fn command_exists(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Executable path for `name`, if it resolves.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.lookup.resolve(name)
    }

    /// Supported candidates for `capability` in platform order. For the
    /// terminal role these are the supported terminal names.
    pub fn supported_variants(&self, capability: ToolCapability) -> Vec<&'static str> {
        if capability.is_terminal() {
            self.profile.supported_terminals()
        } else {
            self.profile.supported_editor_variants(capability).to_vec()
        }
    }
}
