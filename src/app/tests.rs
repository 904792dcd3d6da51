use std::cell::RefCell;

use super::*;
use crate::config::FileStore;
use crate::platform::HostPlatform;
use crate::profile::PlatformProfile;
use crate::testing::{FakeLookup, RecordingSpawner};

#[derive(Default)]
struct MemoryStore {
    stored: RefCell<Option<ToolConfiguration>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    fn holding(config: ToolConfiguration) -> Self {
        Self {
            stored: RefCell::new(Some(config)),
            saves: RefCell::new(0),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<ToolConfiguration> {
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, config: &ToolConfiguration) -> Result<()> {
        *self.stored.borrow_mut() = Some(config.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

fn linux(installed: &[&str]) -> CapabilityResolver<FakeLookup> {
    CapabilityResolver::new(PlatformProfile::new(HostPlatform::Linux), FakeLookup::with(installed))
}

#[test]
fn test_start_repairs_and_writes_back() {
    crate::logging::init_test();
    let mut broken = ToolConfiguration::default();
    broken.editor.primary = "vim".into();
    broken.terminal.candidates = vec!["hyper".into()];

    let app = App::start(
        MemoryStore::holding(broken),
        linux(&[]),
        RecordingSpawner::default(),
    )
    .unwrap();

    let profile = PlatformProfile::new(HostPlatform::Linux);
    assert_eq!(app.configuration().editor.primary, "cursor");
    assert_eq!(
        app.configuration().terminal.candidates,
        profile.default_terminals()
    );
    assert_eq!(*app.store().saves.borrow(), 1);
    assert_eq!(app.startup_issues().len(), 2);
    assert_eq!(
        app.store().stored.borrow().as_ref(),
        Some(app.configuration())
    );
}

#[test]
fn test_start_with_valid_config_does_not_write() {
    let valid = PlatformProfile::new(HostPlatform::Linux).default_configuration();
    let app = App::start(
        MemoryStore::holding(valid.clone()),
        linux(&[]),
        RecordingSpawner::default(),
    )
    .unwrap();
    assert_eq!(app.configuration(), &valid);
    assert_eq!(*app.store().saves.borrow(), 0);
    assert!(app.startup_issues().is_empty());
}

#[test]
fn test_first_run_writes_platform_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let profile = PlatformProfile::new(HostPlatform::Linux);
    let store = FileStore::new(dir.path().join("config.toml"), profile.default_configuration());

    let app = App::start(store, linux(&[]), RecordingSpawner::default()).unwrap();
    assert_eq!(app.configuration(), &profile.default_configuration());
    // Valid defaults need no repair, so nothing is written until an edit.
    assert!(!app.store().path().exists());
}

#[test]
fn test_launch_uses_configured_grace_and_reports_choice() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = PlatformProfile::new(HostPlatform::Linux).default_configuration();
    config.launch.grace = std::time::Duration::from_millis(120);
    config.terminal.candidates = vec!["konsole".into(), "xterm".into()];

    let app = App::start(
        MemoryStore::holding(config),
        linux(&["xterm"]),
        RecordingSpawner::default(),
    )
    .unwrap();

    let result = app.launch(ToolCapability::Terminal, dir.path());
    assert_eq!(
        result,
        LaunchResult {
            succeeded: true,
            chosen_command: Some("xterm".into()),
            error: None,
        }
    );
    assert_eq!(
        *app.spawner.graces.borrow(),
        [std::time::Duration::from_millis(120)]
    );
}

#[test]
fn test_launch_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::start(MemoryStore::default(), linux(&["cursor"]), RecordingSpawner::default())
        .unwrap();
    let result = app.launch(ToolCapability::PrimaryEditor, &dir.path().join("missing"));
    assert!(!result.succeeded);
    assert!(result.error.unwrap().starts_with("directory does not exist"));
    assert!(app.spawner.started.borrow().is_empty());
}

#[test]
fn test_update_configuration_repairs_before_saving() {
    let mut app = App::start(MemoryStore::default(), linux(&[]), RecordingSpawner::default())
        .unwrap();
    let mut edit = app.configuration().clone();
    edit.editor.ide = "eclipse".into();

    let repaired = app.update_configuration(edit).unwrap();
    assert!(repaired.was_fixed);
    assert_eq!(app.configuration().editor.ide, "idea");
    assert_eq!(
        app.store().stored.borrow().as_ref().unwrap().editor.ide,
        "idea"
    );
}

#[test]
fn test_validate_and_maybe_fix_does_not_store() {
    let app = App::start(MemoryStore::default(), linux(&[]), RecordingSpawner::default())
        .unwrap();
    let saves = *app.store().saves.borrow();
    let repaired = app.validate_and_maybe_fix(ToolConfiguration::default());
    assert!(repaired.was_fixed);
    assert_eq!(*app.store().saves.borrow(), saves);
}

#[test]
fn test_reset_to_defaults() {
    let mut app = App::start(MemoryStore::default(), linux(&[]), RecordingSpawner::default())
        .unwrap();
    let mut edit = app.configuration().clone();
    edit.terminal.candidates = vec!["kitty".into()];
    app.update_configuration(edit).unwrap();

    app.reset_to_defaults().unwrap();
    assert_eq!(
        app.configuration(),
        &PlatformProfile::new(HostPlatform::Linux).default_configuration()
    );
}
