use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the platform default configuration to disk
    Init,
    /// Set a configuration value (e.g. editor.primary cursor)
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
    /// Check the configuration against this platform and repair it
    Validate,
    /// Restore the platform defaults
    Reset,
}

pub fn cmd_config(config_path: Option<&Path>, action: ConfigAction) -> Result<()> {
    let mut app = super::bootstrap(config_path)?;
    match action {
        ConfigAction::Show => {
            let pretty = toml::to_string_pretty(app.configuration())?;
            print!("{pretty}");
        }
        ConfigAction::Path => {
            println!("{}", app.store().path().display());
        }
        ConfigAction::Init => {
            app.reset_to_defaults()?;
            println!("Wrote default config to {}", app.store().path().display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = app.configuration().clone();
            config.set_value(&key, &value)?;
            let repaired = app.update_configuration(config)?;
            for issue in &repaired.issues {
                eprintln!("Warning: {issue}");
            }
            println!("Set {key} = {}", app.configuration().get_value(&key)?);
        }
        ConfigAction::Get { key } => {
            println!("{}", app.configuration().get_value(&key)?);
        }
        ConfigAction::Validate => {
            if app.startup_issues().is_empty() {
                println!("Configuration is valid");
            } else {
                for issue in app.startup_issues() {
                    println!("fixed: {issue}");
                }
                println!("Repaired configuration written to {}", app.store().path().display());
            }
            for missing in app.validator().missing_commands(app.configuration()) {
                println!("note: {missing}");
            }
        }
        ConfigAction::Reset => {
            app.reset_to_defaults()?;
            println!("Reset configuration at {}", app.store().path().display());
        }
    }
    Ok(())
}
