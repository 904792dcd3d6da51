use anyhow::{Context, Result};
use std::path::Path;

use dirlaunch::ToolCapability;

pub fn cmd_open(config_path: Option<&Path>, dir: &Path, tool: ToolCapability) -> Result<()> {
    let app = super::bootstrap(config_path)?;
    let dir = std::path::absolute(dir)
        .with_context(|| format!("Failed to resolve {}", dir.display()))?;

    let launched = app
        .try_launch(tool, &dir)
        .with_context(|| format!("Could not open {} with the {tool}", dir.display()))?;
    eprintln!(
        "Opened {} with {} ({})",
        dir.display(),
        launched.command,
        launched.invocation
    );
    Ok(())
}
