//! Composition root: one store, one resolver, one spawner, and the
//! configuration snapshot they share for the life of the process.

use anyhow::Result;
use std::path::Path;

use tracing::{info, warn};

use crate::config::{ConfigStore, ToolConfiguration};
use crate::launcher::{DetachedSpawner, LaunchResult, Launched, Launcher, Spawner};
use crate::error::LaunchError;
use crate::platform::ToolCapability;
use crate::resolver::{CapabilityResolver, CommandLookup, PathLookup};
use crate::validator::{ConfigValidator, Repaired};

/// Owns every collaborator the launch path needs.
pub struct App<S, L = PathLookup, P = DetachedSpawner> {
    store: S,
    resolver: CapabilityResolver<L>,
    spawner: P,
    config: ToolConfiguration,
    startup_issues: Vec<String>,
}

impl<S: ConfigStore, L: CommandLookup, P: Spawner> App<S, L, P> {
    /// Load the stored configuration, repair it if needed, and write the
    /// repaired version back.
    ///
    /// # Errors
    /// Returns an error when the store cannot be read, or a repaired
    /// configuration cannot be written.
    pub fn start(store: S, resolver: CapabilityResolver<L>, spawner: P) -> Result<Self> {
        let loaded = store.load()?;
        let repaired = ConfigValidator::new(&resolver).validate_and_fix(loaded);
        if repaired.was_fixed {
            store.save(&repaired.config)?;
            info!("Tool configuration auto-fixed");
        }
        Ok(Self {
            store,
            resolver,
            spawner,
            config: repaired.config,
            startup_issues: repaired.issues,
        })
    }

    /// Issues found (and fixed) in the stored configuration at startup.
    pub fn startup_issues(&self) -> &[String] {
        &self.startup_issues
    }

    /// The current, valid configuration.
    pub const fn configuration(&self) -> &ToolConfiguration {
        &self.config
    }

    /// The resolver this app launches through.
    pub const fn resolver(&self) -> &CapabilityResolver<L> {
        &self.resolver
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Validator bound to this app's platform.
    pub const fn validator(&self) -> ConfigValidator<'_, L> {
        ConfigValidator::new(&self.resolver)
    }

    /// Open `dir` with `capability`.
    ///
    /// # Errors
    /// See [`Launcher::launch`].
    pub fn try_launch(&self, capability: ToolCapability, dir: &Path) -> Result<Launched, LaunchError> {
        Launcher::new(&self.resolver, &self.spawner)
            .with_grace(self.config.launch.grace)
            .launch(capability, dir, &self.config)
    }

    /// Open `dir` with `capability`, flattened into a [`LaunchResult`].
    pub fn launch(&self, capability: ToolCapability, dir: &Path) -> LaunchResult {
        self.try_launch(capability, dir).into()
    }

    /// Validate `config` and auto-fix it if needed, without storing it.
    pub fn validate_and_maybe_fix(&self, config: ToolConfiguration) -> Repaired {
        self.validator().validate_and_fix(config)
    }

    /// Replace the configuration with a user edit. The edit is repaired
    /// before it is written, so the store never holds an invalid value.
    ///
    /// # Errors
    /// Returns an error when the configuration cannot be written.
    pub fn update_configuration(&mut self, config: ToolConfiguration) -> Result<Repaired> {
        let repaired = self.validate_and_maybe_fix(config);
        if repaired.was_fixed {
            warn!("Tool configuration auto-fixed before saving");
        }
        self.store.save(&repaired.config)?;
        self.config = repaired.config.clone();
        Ok(repaired)
    }

    /// Restore the platform defaults and store them.
    ///
    /// # Errors
    /// Returns an error when the configuration cannot be written.
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        let defaults = self.resolver.profile().default_configuration();
        self.update_configuration(defaults)?;
        info!("Reset tool configuration to platform defaults");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
