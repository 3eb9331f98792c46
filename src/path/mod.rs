//! Hosts file location sources.
//!
//! The registry asks a [`PathSource`] for the file location on every load
//! and save, so the operating system lookup stays out of the registry.

use std::path::PathBuf;

/// Hosts file location on Windows.
pub const WINDOWS_HOSTS_PATH: &str = r"C:\Windows\System32\drivers\etc\hosts";

/// Hosts file location on every other platform.
pub const UNIX_HOSTS_PATH: &str = "/etc/hosts";

/// Source of the hosts file location.
pub trait PathSource: Send + Sync {
    /// Returns the path of the hosts file.
    fn get(&self) -> PathBuf;
}

/// A caller-supplied, fixed hosts file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPath {
    path: PathBuf,
}

impl FixedPath {
    /// Creates a source that always returns `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PathSource for FixedPath {
    fn get(&self) -> PathBuf {
        self.path.clone()
    }
}

/// The platform default hosts file location.
///
/// Selected from [`std::env::consts::OS`] at call time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsDefaultPath;

impl OsDefaultPath {
    /// Returns the default hosts file path for the given OS identifier.
    #[must_use]
    pub fn for_os(os: &str) -> PathBuf {
        if os.eq_ignore_ascii_case("windows") {
            PathBuf::from(WINDOWS_HOSTS_PATH)
        } else {
            PathBuf::from(UNIX_HOSTS_PATH)
        }
    }
}

impl PathSource for OsDefaultPath {
    fn get(&self) -> PathBuf {
        Self::for_os(std::env::consts::OS)
    }
}
