pub mod config;
pub mod doctor;
pub mod open;
pub mod setup;

use anyhow::Result;
use std::path::{Path, PathBuf};

use dirlaunch::{
    config::FileStore,
    resolver::{CapabilityResolver, PathLookup},
    App, PlatformProfile,
};

/// The app as every command sees it: file-backed, real PATH, real processes.
pub type CliApp = App<FileStore>;

fn store_path(config_path: Option<&Path>) -> Result<PathBuf> {
    config_path.map_or_else(FileStore::default_path, |p| Ok(p.to_path_buf()))
}

/// Resolve the platform, load and repair the configuration.
pub fn bootstrap(config_path: Option<&Path>) -> Result<CliApp> {
    let profile = PlatformProfile::current()?;
    let store = FileStore::new(store_path(config_path)?, profile.default_configuration());
    let resolver = CapabilityResolver::new(profile, PathLookup::from_env());
    let app = App::start(store, resolver, dirlaunch::launcher::DetachedSpawner)?;
    Ok(app)
}
