//! Checks a [`ToolConfiguration`] against what the platform supports and
//! repairs it in place of failing.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{ToolConfiguration, DEFAULT_GRACE};
use crate::platform::ToolCapability;
use crate::resolver::{CapabilityResolver, CommandLookup};

/// Longest grace window accepted per candidate.
pub const MAX_GRACE: Duration = Duration::from_secs(5);

/// Outcome of [`ConfigValidator::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Human readable problems, in discovery order.
    pub issues: Vec<String>,
}

impl ValidationReport {
    /// No issues were found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Outcome of [`ConfigValidator::validate_and_fix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repaired {
    /// The configuration to use, fixed if needed.
    pub config: ToolConfiguration,
    /// Whether anything had to be changed.
    pub was_fixed: bool,
    /// What was wrong with the input.
    pub issues: Vec<String>,
}

/// Validates and auto-fixes configurations for one platform.
pub struct ConfigValidator<'a, L> {
    resolver: &'a CapabilityResolver<L>,
}

impl<'a, L: CommandLookup> ConfigValidator<'a, L> {
    /// Validator answering from `resolver`'s platform.
    pub const fn new(resolver: &'a CapabilityResolver<L>) -> Self {
        Self { resolver }
    }

    /// List every way `config` departs from the supported set. Never fails.
    pub fn validate(&self, config: &ToolConfiguration) -> ValidationReport {
        let mut issues = Vec::new();

        for (capability, command) in config.editor_commands() {
            let supported = self.resolver.supported_variants(capability);
            if !supported.contains(&command) {
                issues.push(format!(
                    "Unsupported {capability} configuration: {command}. Supported: {}",
                    supported.join(", ")
                ));
            }
        }

        let supported = self.resolver.supported_variants(ToolCapability::Terminal);
        if config.terminal.candidates.is_empty() {
            issues.push("Terminal configuration must be a non-empty list".to_string());
        } else {
            let unsupported: Vec<&str> = config
                .terminal
                .candidates
                .iter()
                .map(String::as_str)
                .filter(|name| !supported.contains(name))
                .collect();
            if !unsupported.is_empty() {
                issues.push(format!("Unsupported terminals: {}", unsupported.join(", ")));
            }
        }

        if config.launch.grace > MAX_GRACE {
            issues.push(format!(
                "Launch grace window {} exceeds {}",
                humantime::format_duration(config.launch.grace),
                humantime::format_duration(MAX_GRACE)
            ));
        }

        ValidationReport { issues }
    }

    /// Replace every unsupported value with the platform default. The result
    /// always validates, and fixing a fixed configuration changes nothing.
    pub fn auto_fix(&self, config: &ToolConfiguration) -> ToolConfiguration {
        let profile = self.resolver.profile();
        let mut fixed = config.clone();

        for capability in ToolCapability::EDITORS {
            let Some(current) = config.editor_command(capability) else {
                continue;
            };
            if self.resolver.supported_variants(capability).contains(&current) {
                continue;
            }
            let default = profile.default_editor(capability).unwrap_or_default();
            warn!("Auto-fixed {capability} configuration from {current} to {default}");
            fixed.set_editor_command(capability, default);
        }

        let supported = self.resolver.supported_variants(ToolCapability::Terminal);
        let kept: Vec<String> = config
            .terminal
            .candidates
            .iter()
            .filter(|name| supported.contains(&name.as_str()))
            .cloned()
            .collect();
        if kept.is_empty() {
            fixed.terminal.candidates = profile.default_terminals();
            warn!(
                "Auto-fixed terminal configuration to {}",
                fixed.terminal.candidates.join(", ")
            );
        } else if kept.len() != config.terminal.candidates.len() {
            warn!("Dropped unsupported terminals, keeping {}", kept.join(", "));
            fixed.terminal.candidates = kept;
        }

        if config.launch.grace > MAX_GRACE {
            warn!(
                "Auto-fixed launch grace window to {}",
                humantime::format_duration(DEFAULT_GRACE)
            );
            fixed.launch.grace = DEFAULT_GRACE;
        }

        fixed
    }

    /// Validate `config` and, if it has issues, auto-fix it.
    pub fn validate_and_fix(&self, config: ToolConfiguration) -> Repaired {
        let report = self.validate(&config);
        if report.is_valid() {
            debug!("Tool configuration is valid");
            return Repaired {
                config,
                was_fixed: false,
                issues: Vec::new(),
            };
        }
        for issue in &report.issues {
            warn!("{issue}");
        }
        Repaired {
            config: self.auto_fix(&config),
            was_fixed: true,
            issues: report.issues,
        }
    }

    /// Configured commands that are supported but do not resolve on this
    /// machine. Informational only.
    pub fn missing_commands(&self, config: &ToolConfiguration) -> Vec<String> {
        let mut missing = Vec::new();
        for (capability, command) in config.editor_commands() {
            if !self.resolver.command_exists(command) {
                missing.push(format!(
                    "Editor command not found: {command} ({})",
                    capability.key()
                ));
            }
        }
        let profile = self.resolver.profile();
        for name in &config.terminal.candidates {
            let program = profile.terminal_invocation(name, Path::new(".")).program;
            if !self.resolver.command_exists(&program) {
                missing.push(format!("Terminal command not found: {name}"));
            }
        }
        missing
    }
}
