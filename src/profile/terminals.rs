use std::ffi::{OsStr, OsString};
use std::path::Path;

use super::Invocation;
use crate::platform::HostPlatform;

/// How a terminal program is told which directory to start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Workdir {
    /// `program <flag> <dir>`
    Flag(&'static str),
    /// `program <flag><dir>`, e.g. `--cd=<dir>`
    Joined(&'static str),
    /// `program -e sh -c 'cd "$1" && exec $SHELL' sh <dir>` for terminals with no flag.
    ShellWrapper,
    /// `open -a <App> <dir>`
    MacApp(&'static str),
    /// `cmd /c start cmd /k cd /d "<dir>"`
    CmdStart,
    /// `<program> -Command Start-Process <program> ... Set-Location "<dir>"`
    StartProcess,
}

/// Argument-building rule for one known terminal program.
#[derive(Debug, Clone, Copy)]
pub struct TerminalRule {
    /// Name as it appears in configuration.
    pub name: &'static str,
    program: &'static str,
    workdir: Workdir,
    use_shell: bool,
}

impl TerminalRule {
    const fn unix(name: &'static str, workdir: Workdir) -> Self {
        Self {
            name,
            program: name,
            workdir,
            use_shell: false,
        }
    }

    const fn mac(name: &'static str, app: &'static str) -> Self {
        Self {
            name,
            program: "open",
            workdir: Workdir::MacApp(app),
            use_shell: false,
        }
    }

    const fn windows(name: &'static str, workdir: Workdir) -> Self {
        Self {
            name,
            program: name,
            workdir,
            use_shell: true,
        }
    }

    /// Application bundle name for terminals launched through `open -a`.
    pub const fn mac_app(&self) -> Option<&'static str> {
        match self.workdir {
            Workdir::MacApp(app) => Some(app),
            _ => None,
        }
    }

    /// Build the invocation that opens this terminal at `dir`.
    pub fn invocation(&self, dir: &Path) -> Invocation {
        let dir = dir.as_os_str();
        let args = match self.workdir {
            Workdir::Flag(flag) => vec![flag.into(), dir.to_os_string()],
            Workdir::Joined(flag) => vec![concat(&[OsStr::new(flag), dir])],
            // The directory travels as `$1` so it is never re-parsed by the shell.
            Workdir::ShellWrapper => vec![
                "-e".into(),
                "sh".into(),
                "-c".into(),
                "cd \"$1\" && exec \"${SHELL:-sh}\"".into(),
                "sh".into(),
                dir.to_os_string(),
            ],
            Workdir::MacApp(app) => vec!["-a".into(), app.into(), dir.to_os_string()],
            Workdir::CmdStart => vec![
                "/c".into(),
                "start".into(),
                "cmd".into(),
                "/k".into(),
                concat(&[OsStr::new("cd /d \""), dir, OsStr::new("\"")]),
            ],
            Workdir::StartProcess => vec![
                "-Command".into(),
                concat(&[
                    OsStr::new(&format!(
                        "Start-Process {} -ArgumentList '-NoExit', '-Command', 'Set-Location \"",
                        self.program
                    )),
                    dir,
                    OsStr::new("\"'"),
                ]),
            ],
        };
        Invocation {
            program: self.program.to_string(),
            args,
            use_shell: self.use_shell,
        }
    }
}

fn concat(parts: &[&OsStr]) -> OsString {
    let mut joined = OsString::new();
    for part in parts {
        joined.push(part);
    }
    joined
}

pub(super) const WINDOWS: &[TerminalRule] = &[
    TerminalRule::windows("wt", Workdir::Flag("-d")),
    TerminalRule::windows("cmd", Workdir::CmdStart),
    TerminalRule::windows("powershell", Workdir::StartProcess),
    TerminalRule::windows("pwsh", Workdir::StartProcess),
    TerminalRule::windows("git-bash", Workdir::Joined("--cd=")),
];

pub(super) const MACOS: &[TerminalRule] = &[
    TerminalRule::mac("open -a Terminal", "Terminal"),
    TerminalRule::mac("open -a iTerm", "iTerm"),
    TerminalRule::mac("open -a Alacritty", "Alacritty"),
    TerminalRule::mac("open -a Kitty", "Kitty"),
    TerminalRule::mac("open -a Warp", "Warp"),
];

pub(super) const LINUX: &[TerminalRule] = &[
    TerminalRule::unix("gnome-terminal", Workdir::Flag("--working-directory")),
    TerminalRule::unix("konsole", Workdir::Flag("--workdir")),
    TerminalRule::unix("xfce4-terminal", Workdir::Flag("--working-directory")),
    TerminalRule::unix("alacritty", Workdir::Flag("--working-directory")),
    TerminalRule::unix("kitty", Workdir::Flag("--directory")),
    TerminalRule::unix("terminator", Workdir::Flag("--working-directory")),
    TerminalRule::unix("tilix", Workdir::Flag("--working-directory")),
    TerminalRule::unix("xterm", Workdir::ShellWrapper),
    TerminalRule::unix("urxvt", Workdir::Flag("-cd")),
    TerminalRule::unix("st", Workdir::ShellWrapper),
];

/// Invocation for a terminal name that has no rule on `platform`.
pub(super) fn fallback(platform: HostPlatform, name: &str, dir: &Path) -> Invocation {
    let dir = dir.as_os_str().to_os_string();
    match platform {
        HostPlatform::Linux => Invocation {
            program: name.to_string(),
            args: vec!["--working-directory".into(), dir],
            use_shell: false,
        },
        HostPlatform::MacOs => match name.strip_prefix("open -a ") {
            Some(app) => Invocation {
                program: "open".to_string(),
                args: vec!["-a".into(), app.trim().into(), dir],
                use_shell: false,
            },
            None => Invocation {
                program: name.to_string(),
                args: vec![dir],
                use_shell: false,
            },
        },
        HostPlatform::Windows => Invocation {
            program: name.to_string(),
            args: vec![dir],
            use_shell: true,
        },
    }
}
