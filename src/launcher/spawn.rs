use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::profile::Invocation;
use crate::resolver::augmented_path;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Why a single candidate did not start.
#[derive(Error, Debug)]
pub enum StartError {
    /// Process creation itself failed.
    #[error("failed to spawn: {0}")]
    Spawn(#[source] std::io::Error),
    /// The process exited unsuccessfully inside the grace window.
    #[error("exited during startup with status {}", .0.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    ExitedEarly(Option<i32>),
    /// The process state could not be queried.
    #[error("failed to observe startup: {0}")]
    Wait(#[source] std::io::Error),
}

/// Starts one candidate and watches it for the grace window.
pub trait Spawner {
    /// Start `invocation` with `executable` as the resolved program.
    /// Returns once the process survives (or cleanly exits within) `grace`.
    ///
    /// # Errors
    /// Returns a [`StartError`] when the candidate failed to start.
    fn start(
        &self,
        executable: &Path,
        invocation: &Invocation,
        grace: Duration,
    ) -> Result<(), StartError>;
}

/// Spawns real processes, detached from this one, with all standard streams
/// discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSpawner;

impl Spawner for DetachedSpawner {
    fn start(
        &self,
        executable: &Path,
        invocation: &Invocation,
        grace: Duration,
    ) -> Result<(), StartError> {
        let mut command = build_command(executable, invocation);
        command
            .env("PATH", augmented_path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut command);

        let mut child = command.spawn().map_err(StartError::Spawn)?;
        let deadline = Instant::now() + grace;
        loop {
            match child.try_wait() {
                // Launcher stubs (`open -a`, `cmd /c start`) hand off and exit 0.
                Ok(Some(status)) if status.success() => return Ok(()),
                Ok(Some(status)) => return Err(StartError::ExitedEarly(status.code())),
                Ok(None) => {
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    thread::sleep(POLL_INTERVAL.min(deadline - now));
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(StartError::Wait(e));
                }
            }
        }

        // Still running: leave it alive and reap it whenever it exits.
        thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

fn build_command(executable: &Path, invocation: &Invocation) -> Command {
    if !invocation.use_shell {
        let mut command = Command::new(executable);
        command.args(&invocation.args);
        return command;
    }
    shell_command(executable, invocation)
}

// `cmd /C` strips the first and last quote of a line that starts with one,
// so a quoted resolved path would be cut at its first space. The interpreter
// gets the bare program name and finds it on the augmented PATH.
#[cfg(windows)]
fn shell_command(_executable: &Path, invocation: &Invocation) -> Command {
    let mut command = Command::new("cmd");
    command
        .arg("/C")
        .arg(&invocation.program)
        .args(&invocation.args);
    command
}

#[cfg(not(windows))]
fn shell_command(executable: &Path, invocation: &Invocation) -> Command {
    let mut command = Command::new("sh");
    command
        .arg("-c")
        .arg("exec \"$0\" \"$@\"")
        .arg(executable)
        .args(&invocation.args);
    command
}

#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
}

#[cfg(windows)]
fn detach(command: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_command: &mut Command) {}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::ffi::{OsStr, OsString};

    fn invocation(program: &str, args: &[&str]) -> Invocation {
        Invocation {
            program: program.to_string(),
            args: args.iter().map(OsString::from).collect(),
            use_shell: false,
        }
    }

    #[test]
    fn test_clean_exit_is_success() {
        let inv = invocation("true", &[]);
        let exe = which::which("true").unwrap();
        DetachedSpawner
            .start(&exe, &inv, Duration::from_millis(500))
            .unwrap();
    }

    #[test]
    fn test_early_failure_is_reported() {
        let inv = invocation("false", &[]);
        let exe = which::which("false").unwrap();
        let err = DetachedSpawner
            .start(&exe, &inv, Duration::from_millis(500))
            .unwrap_err();
        assert!(matches!(err, StartError::ExitedEarly(Some(1))), "{err}");
    }

    #[test]
    fn test_long_running_survives_grace_window() {
        let inv = invocation("sleep", &["2"]);
        let exe = which::which("sleep").unwrap();
        let started = Instant::now();
        DetachedSpawner
            .start(&exe, &inv, Duration::from_millis(100))
            .unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_missing_executable_fails_to_spawn() {
        let inv = invocation("nope", &[]);
        let err = DetachedSpawner
            .start(
                Path::new("/definitely/not/here/nope"),
                &inv,
                Duration::from_millis(100),
            )
            .unwrap_err();
        assert!(matches!(err, StartError::Spawn(_)));
    }

    #[test]
    fn test_shell_routing_passes_arguments() {
        let mut inv = invocation("sh", &["-c", "exit 3"]);
        inv.use_shell = true;
        let exe = which::which("sh").unwrap();
        let err = DetachedSpawner
            .start(&exe, &inv, Duration::from_millis(500))
            .unwrap_err();
        assert!(matches!(err, StartError::ExitedEarly(Some(3))), "{err}");
    }

    #[test]
    fn test_shell_command_keeps_spaced_executable_as_one_argument() {
        let mut inv = invocation("pwsh", &["-Command", "Set-Location 'x'"]);
        inv.use_shell = true;
        let command = build_command(Path::new("/opt/My Tools/pwsh"), &inv);
        assert_eq!(command.get_program(), "sh");
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(
            args,
            [
                "-c",
                "exec \"$0\" \"$@\"",
                "/opt/My Tools/pwsh",
                "-Command",
                "Set-Location 'x'",
            ]
        );
    }

    #[test]
    fn test_direct_command_uses_resolved_executable() {
        let inv = invocation("code", &["/tmp/proj"]);
        let command = build_command(Path::new("/usr/local/bin/code"), &inv);
        assert_eq!(command.get_program(), "/usr/local/bin/code");
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, ["/tmp/proj"]);
    }
}
