//! `dirlaunch` command-line entry point.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dirlaunch::{config::CONFIG_ENV, logging, ToolCapability};

use commands::config::ConfigAction;

#[derive(Parser)]
#[command(name = "dirlaunch", about = "Open project directories in your editor or terminal")]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = CONFIG_ENV, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a directory with the first working candidate for a tool
    Open {
        /// Directory to open
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Which tool to open it with: primary, secondary, ide or terminal
        #[arg(long, short, default_value = "primary")]
        tool: ToolCapability,
    },

    /// Manage the tool configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show platform support and which configured tools resolve here
    Doctor,

    /// Detect installed tools and write a configuration that prefers them
    Setup,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Open { dir, tool } => commands::open::cmd_open(config_path, &dir, tool)?,
        Commands::Config { action } => commands::config::cmd_config(config_path, action)?,
        Commands::Doctor => commands::doctor::cmd_doctor(config_path)?,
        Commands::Setup => commands::setup::cmd_setup(config_path)?,
    }

    Ok(())
}
