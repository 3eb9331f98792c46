//! Raw hosts file content access.
//!
//! The registry reads and writes the whole file as text through a
//! [`ContentStore`], which keeps the file system out of registry tests.

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::FileContentStore;

use std::io;
use std::path::Path;

/// Whole-file text access for the hosts file.
///
/// Implementations do not retry and do not provide atomic replacement.
/// Errors are returned exactly as the underlying system reports them.
pub trait ContentStore: Send + Sync {
    /// Reads the full content of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Replaces the full content of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be written.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}
