//! File system implementation of [`ContentStore`].

use std::io;
use std::path::Path;

use super::ContentStore;

/// Reads and writes the hosts file directly on the file system.
///
/// Content is decoded as UTF-8 with invalid byte sequences replaced by
/// U+FFFD, so a stray legacy-encoded byte never makes the file unreadable.
/// Writes truncate and rewrite the file in place. A failed write may leave
/// the file partially written.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileContentStore;

impl ContentStore for FileContentStore {
    fn read(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}
