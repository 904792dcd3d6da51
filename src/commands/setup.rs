use anyhow::Result;
use std::path::Path;

use dirlaunch::{profile::TerminalRule, ToolCapability};

use super::CliApp;

pub fn cmd_setup(config_path: Option<&Path>) -> Result<()> {
    let mut app = super::bootstrap(config_path)?;
    let already_existed = app.store().path().exists();
    let mut config = app.configuration().clone();

    for capability in ToolCapability::EDITORS {
        match detect_editor(&app, capability) {
            Some(found) => {
                eprintln!("Detected {capability}: {found}");
                config.set_editor_command(capability, found);
            }
            None => eprintln!(
                "No {capability} found on PATH, keeping {}",
                config.editor_command(capability).unwrap_or("(none)")
            ),
        }
    }

    let terminals = detect_terminals(&app);
    if terminals.is_empty() {
        eprintln!("No terminals detected, keeping the platform defaults");
        config.terminal.candidates = app.resolver().profile().default_terminals();
    } else {
        eprintln!("Detected terminals: {}", terminals.join(", "));
        config.terminal.candidates = terminals;
    }

    app.update_configuration(config)?;
    if already_existed {
        eprintln!("Updated config at {}", app.store().path().display());
    } else {
        eprintln!("Created config at {}", app.store().path().display());
    }

    eprintln!("\nSetup complete! Run: dirlaunch open <DIR>");
    Ok(())
}

/// First supported variant for `capability` that resolves on PATH.
fn detect_editor(app: &CliApp, capability: ToolCapability) -> Option<&'static str> {
    let resolver = app.resolver();
    resolver
        .supported_variants(capability)
        .into_iter()
        .find(|variant| resolver.command_exists(variant))
}

/// Installed terminals in the platform's preference order.
fn detect_terminals(app: &CliApp) -> Vec<String> {
    let resolver = app.resolver();
    let profile = resolver.profile();
    profile
        .supported_terminals()
        .into_iter()
        .filter(|name| {
            let program = profile.terminal_invocation(name, Path::new(".")).program;
            if !resolver.command_exists(&program) {
                return false;
            }
            profile
                .terminal_rule(name)
                .and_then(TerminalRule::mac_app)
                .is_none_or(macos_app_exists)
        })
        .map(ToString::to_string)
        .collect()
}

fn macos_app_exists(app_name: &str) -> bool {
    let bundle = format!("{app_name}.app");
    let system = [
        Path::new("/Applications").join(&bundle),
        Path::new("/System/Applications/Utilities").join(&bundle),
    ];
    let user = dirs::home_dir().map(|h| h.join("Applications").join(&bundle));
    system.iter().any(|p| p.exists()) || user.is_some_and(|p| p.exists())
}
