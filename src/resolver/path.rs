use std::ffi::OsString;
use std::path::PathBuf;

/// Directories GUI sessions on macOS commonly miss from `PATH`.
const EXTRA_DIRS: &[&str] = &["/usr/local/bin", "/opt/homebrew/bin", "/opt/homebrew/sbin"];

/// `PATH` with well-known binary directories prepended, without duplicates.
pub fn augmented_path() -> OsString {
    let current = std::env::var_os("PATH").unwrap_or_default();
    augment(&current)
}

fn augment(current: &OsString) -> OsString {
    let mut parts: Vec<PathBuf> = if cfg!(unix) {
        EXTRA_DIRS.iter().map(PathBuf::from).collect()
    } else {
        Vec::new()
    };
    for p in std::env::split_paths(current).filter(|p| !p.as_os_str().is_empty()) {
        if !parts.contains(&p) {
            parts.push(p);
        }
    }
    std::env::join_paths(parts).unwrap_or_else(|_| current.clone())
}
