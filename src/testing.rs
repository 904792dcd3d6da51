//! Test doubles for the lookup and spawner seams.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::launcher::{Spawner, StartError};
use crate::profile::Invocation;
use crate::resolver::CommandLookup;

/// Resolves exactly the names it was given and records every probe.
#[derive(Default)]
pub struct FakeLookup {
    installed: HashSet<String>,
    pub probed: RefCell<Vec<String>>,
}

impl FakeLookup {
    pub fn with(names: &[&str]) -> Self {
        Self {
            installed: names.iter().map(ToString::to_string).collect(),
            probed: RefCell::default(),
        }
    }
}

impl CommandLookup for FakeLookup {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.probed.borrow_mut().push(name.to_string());
        self.installed
            .contains(name)
            .then(|| PathBuf::from("/fake/bin").join(name))
    }
}

/// Records every start; programs listed in `failing` exit early.
#[derive(Default)]
pub struct RecordingSpawner {
    failing: HashSet<String>,
    pub started: RefCell<Vec<Invocation>>,
    pub graces: RefCell<Vec<Duration>>,
}

impl RecordingSpawner {
    pub fn failing(programs: &[&str]) -> Self {
        Self {
            failing: programs.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.started
            .borrow()
            .iter()
            .map(|inv| inv.program.clone())
            .collect()
    }
}

impl Spawner for RecordingSpawner {
    fn start(
        &self,
        _executable: &Path,
        invocation: &Invocation,
        grace: Duration,
    ) -> Result<(), StartError> {
        self.started.borrow_mut().push(invocation.clone());
        self.graces.borrow_mut().push(grace);
        if self.failing.contains(&invocation.program) {
            Err(StartError::ExitedEarly(Some(1)))
        } else {
            Ok(())
        }
    }
}
