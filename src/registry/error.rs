//! Error types for hosts registry operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading and saving the hosts file.
///
/// Lookup misses are not errors; they are reported as `None`.
#[derive(Debug, Error)]
pub enum HostsError {
    /// The hosts file does not exist.
    #[error("Hosts file '{}' not exists.", path.display())]
    FileNotExists {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Failed to read the hosts file.
    #[error("Failed to read hosts file '{}': {source}", path.display())]
    Read {
        /// Path to the hosts file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to write the hosts file.
    #[error("Failed to write hosts file '{}': {source}", path.display())]
    Write {
        /// Path to the hosts file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl HostsError {
    /// Classifies a read failure. A missing file becomes [`Self::FileNotExists`].
    #[must_use]
    pub fn read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotExists { path }
        } else {
            Self::Read { path, source }
        }
    }
}
