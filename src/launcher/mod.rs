//! Ordered-fallback launching of editors and terminals.
//!
//! Candidates are tried strictly one after another. A candidate that does
//! not resolve is skipped without spawning; one that resolves is started and
//! watched for the grace window. The first candidate that survives wins and
//! nothing after it is touched.

mod spawn;


use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::{ToolConfiguration, DEFAULT_GRACE};
use crate::error::LaunchError;
use crate::platform::ToolCapability;
use crate::profile::Invocation;
use crate::resolver::{CapabilityResolver, CommandLookup};

pub use spawn::{DetachedSpawner, Spawner, StartError};

/// A candidate that started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launched {
    /// The candidate as configured, e.g. `"code"` or `"open -a iTerm"`.
    pub command: String,
    /// What was actually run.
    pub invocation: Invocation,
}

/// Flat outcome of one launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchResult {
    /// Whether some candidate started.
    pub succeeded: bool,
    /// The winning candidate.
    pub chosen_command: Option<String>,
    /// Why nothing started.
    pub error: Option<String>,
}

impl From<Result<Launched, LaunchError>> for LaunchResult {
    fn from(result: Result<Launched, LaunchError>) -> Self {
        match result {
            Ok(launched) => Self {
                succeeded: true,
                chosen_command: Some(launched.command),
                error: None,
            },
            Err(e) => Self {
                succeeded: false,
                chosen_command: None,
                error: Some(e.to_string()),
            },
        }
    }
}

enum Attempt {
    Started(Launched),
    Missing,
    Failed(StartError),
}

/// Launches a role at a directory by walking its candidates.
pub struct Launcher<'a, L, S> {
    resolver: &'a CapabilityResolver<L>,
    spawner: &'a S,
    grace: Duration,
}

impl<'a, L: CommandLookup, S: Spawner> Launcher<'a, L, S> {
    /// Launcher with the default grace window.
    pub const fn new(resolver: &'a CapabilityResolver<L>, spawner: &'a S) -> Self {
        Self {
            resolver,
            spawner,
            grace: DEFAULT_GRACE,
        }
    }

    /// Override the grace window.
    #[must_use]
    pub const fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    /// Candidates for `capability` in the order they will be tried.
    pub fn candidates(&self, capability: ToolCapability, config: &ToolConfiguration) -> Vec<String> {
        if capability.is_terminal() {
            let configured: Vec<String> = config
                .terminal
                .candidates
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(ToString::to_string)
                .collect();
            if !configured.is_empty() {
                return configured;
            }
        } else if let Some(command) = config.editor_command(capability) {
            return vec![command.to_string()];
        }
        self.resolver
            .supported_variants(capability)
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Open `dir` with the first working candidate for `capability`.
    ///
    /// # Errors
    /// [`LaunchError::DirectoryNotFound`] when `dir` is not a directory (no
    /// candidate is probed), [`LaunchError::NoWorkingCommand`] when every
    /// candidate is absent or fails to start.
    pub fn launch(
        &self,
        capability: ToolCapability,
        dir: &Path,
        config: &ToolConfiguration,
    ) -> Result<Launched, LaunchError> {
        info!(%capability, dir = %dir.display(), "launching");
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "directory does not exist");
            return Err(LaunchError::DirectoryNotFound(dir.to_path_buf()));
        }

        let candidates = self.candidates(capability, config);
        for candidate in &candidates {
            match self.attempt(capability, candidate, dir) {
                Attempt::Started(launched) => {
                    info!(command = %launched.invocation, "launched {capability}");
                    return Ok(launched);
                }
                Attempt::Missing => debug!(candidate, "command not found"),
                Attempt::Failed(e) => debug!(candidate, error = %e, "failed to launch"),
            }
        }

        warn!(%capability, ?candidates, "no working command");
        Err(LaunchError::NoWorkingCommand {
            capability,
            attempted: candidates,
        })
    }

    fn attempt(&self, capability: ToolCapability, candidate: &str, dir: &Path) -> Attempt {
        let invocation = self.resolver.profile().invocation(capability, candidate, dir);
        debug!(candidate, command = %invocation, "attempting");
        let Some(executable) = self.resolver.resolve(&invocation.program) else {
            return Attempt::Missing;
        };
        match self.spawner.start(&executable, &invocation, self.grace) {
            Ok(()) => Attempt::Started(Launched {
                command: candidate.to_string(),
                invocation,
            }),
            Err(e) => Attempt::Failed(e),
        }
    }
}
