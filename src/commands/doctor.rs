use anyhow::Result;
use std::path::Path;

use dirlaunch::ToolCapability;

pub fn cmd_doctor(config_path: Option<&Path>) -> Result<()> {
    let app = super::bootstrap(config_path)?;
    let resolver = app.resolver();
    let config = app.configuration();

    println!(
        "Platform: {} ({})",
        resolver.profile().platform(),
        std::env::consts::ARCH
    );
    println!("Config:   {}", app.store().path().display());

    for capability in ToolCapability::ALL {
        println!();
        match config.editor_command(capability) {
            Some(command) => println!("{capability}: {command}"),
            None if capability.is_terminal() => {
                println!("{capability}: {}", config.terminal.candidates.join(", "));
            }
            None => println!("{capability}: (platform default)"),
        }
        for variant in resolver.supported_variants(capability) {
            let program = resolver
                .profile()
                .invocation(capability, variant, Path::new("."))
                .program;
            let mark = if resolver.command_exists(&program) { "found" } else { "missing" };
            println!("  {variant:<40} {mark}");
        }
    }

    let missing = app.validator().missing_commands(config);
    if !missing.is_empty() {
        println!();
        for line in missing {
            println!("note: {line}");
        }
    }
    Ok(())
}
