//! Executable lookup: PATH first, then where npm and Homebrew put binaries.

use std::env;
use std::path::PathBuf;

#[cfg(not(windows))]
const SYSTEM_DIRS: &[&str] = &["/usr/local/bin", "/opt/homebrew/bin", "/usr/bin"];
#[cfg(windows)]
const SYSTEM_DIRS: &[&str] = &[];

/// Locate `name` for spawning.
///
/// `which` also resolves Windows shims such as `npm.cmd`.
pub(crate) fn find_executable(name: &str) -> Option<PathBuf> {
    if let Ok(path) = which::which(name) {
        return Some(path);
    }
    fallback_dirs()
        .into_iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}

/// Global-install directories that are often missing from PATH.
fn fallback_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = SYSTEM_DIRS.iter().map(PathBuf::from).collect();

    // A custom npm prefix holds global binaries in `bin` (directly on Windows).
    if let Some(prefix) = env::var_os("NPM_CONFIG_PREFIX").filter(|p| !p.is_empty()) {
        let prefix = PathBuf::from(prefix);
        if cfg!(windows) {
            dirs.push(prefix);
        } else {
            dirs.push(prefix.join("bin"));
        }
    }
    if let Some(appdata) = env::var_os("APPDATA") {
        dirs.push(PathBuf::from(appdata).join("npm"));
    }
    if let Some(home) = env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".npm-global").join("bin"));
        dirs.push(home.join(".local").join("bin"));
    }
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_finds_shell() {
        let path = find_executable("sh").expect("sh should be on PATH");
        assert!(path.exists());
    }

    #[test]
    fn test_missing_program() {
        assert!(find_executable("appium-setup-no-such-program").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_fallback_dirs_include_system_locations() {
        let dirs = fallback_dirs();
        assert!(dirs.contains(&PathBuf::from("/usr/local/bin")));
        assert!(dirs.contains(&PathBuf::from("/opt/homebrew/bin")));
    }
}
