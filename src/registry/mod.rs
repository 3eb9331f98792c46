//! The hosts registry: an ordered, in-memory view of the hosts file.
//!
//! [`Hosts`] owns the current entry sequence for one load/mutate/save
//! cycle. Inserts use the same same-address merge rule as parsing
//! ([`merge_or_append`]), so a registry never holds two address entries
//! with the same literal address.
//!
//! The registry is single-threaded. Callers sharing one across threads
//! must guard it externally.

mod error;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use error::HostsError;

use std::path::PathBuf;

use crate::hosts::{HostEntry, Insertion, merge_or_append, parse, render};
use crate::path::{FixedPath, OsDefaultPath, PathSource};
use crate::storage::{ContentStore, FileContentStore};

/// In-memory hosts file bound to a location and a content store.
#[derive(Debug)]
pub struct Hosts<P, S = FileContentStore> {
    path_source: P,
    store: S,
    entries: Vec<HostEntry>,
}

impl Hosts<OsDefaultPath> {
    /// Loads the platform default hosts file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be read.
    pub fn initialize() -> Result<Self, HostsError> {
        Self::new(OsDefaultPath, FileContentStore)
    }
}

impl Hosts<FixedPath> {
    /// Loads the hosts file at an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`HostsError::FileNotExists`] if nothing exists at `path`,
    /// before any read is attempted. Other read failures are returned as
    /// [`HostsError::Read`].
    pub fn import(path: impl Into<PathBuf>) -> Result<Self, HostsError> {
        let path = path.into();
        if !path.exists() {
            return Err(HostsError::FileNotExists { path });
        }

        Self::new(FixedPath::new(path), FileContentStore)
    }
}

impl<P: PathSource, S: ContentStore> Hosts<P, S> {
    /// Creates a registry and loads its entries immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the hosts file cannot be read.
    pub fn new(path_source: P, store: S) -> Result<Self, HostsError> {
        let mut hosts = Self::empty(path_source, store);
        hosts.load()?;
        Ok(hosts)
    }

    /// Creates a registry with no entries, without reading the file.
    #[must_use]
    pub const fn empty(path_source: P, store: S) -> Self {
        Self {
            path_source,
            store,
            entries: Vec::new(),
        }
    }

    /// Returns the hosts file location.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.path_source.get()
    }

    /// Re-reads the hosts file, discarding every in-memory change.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be read. The
    /// current entries are kept in that case.
    pub fn load(&mut self) -> Result<(), HostsError> {
        let path = self.path_source.get();
        let content = self
            .store
            .read(&path)
            .map_err(|e| HostsError::read(path.clone(), e))?;

        self.entries = parse(&content);
        tracing::debug!(
            "Loaded {} entries from {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Writes the current entries to the hosts file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<(), HostsError> {
        let path = self.path_source.get();
        self.store
            .write(&path, &self.render())
            .map_err(|source| HostsError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Saved {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// Renders the current entries as hosts file text without writing it.
    #[must_use]
    pub fn render(&self) -> String {
        render(&self.entries)
    }

    /// Returns the number of entries, comments included.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entries in their current order.
    #[must_use]
    pub fn entries(&self) -> &[HostEntry] {
        &self.entries
    }

    /// Returns true if an address entry lists `name`.
    #[must_use]
    pub fn exists_by_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Returns true if an address entry has exactly the address `address`.
    #[must_use]
    pub fn exists_by_ip(&self, address: &str) -> bool {
        self.find_by_ip(address).is_some()
    }

    /// Returns the first address entry that lists `name`.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&HostEntry> {
        self.entries.iter().find(|entry| entry.has_name(name))
    }

    /// Returns the first address entry whose literal address is `address`.
    #[must_use]
    pub fn find_by_ip(&self, address: &str) -> Option<&HostEntry> {
        self.entries
            .iter()
            .find(|entry| entry.address() == Some(address))
    }

    /// Adds an entry, merging names into an existing entry with the same address.
    ///
    /// Comments are always appended.
    pub fn add(&mut self, entry: HostEntry) -> Insertion {
        merge_or_append(&mut self.entries, entry)
    }

    /// Adds entries in order, as repeated calls to [`Self::add`].
    pub fn add_all(&mut self, entries: impl IntoIterator<Item = HostEntry>) {
        for entry in entries {
            self.add(entry);
        }
    }

    /// Removes the address found by [`Self::find_by_ip`].
    ///
    /// Returns the number of entries removed; zero when nothing matched.
    pub fn remove_by_ip(&mut self, address: &str) -> usize {
        let found = self.find_by_ip(address).and_then(HostEntry::address).map(str::to_string);
        self.remove_address(found)
    }

    /// Removes the address entry found by [`Self::find_by_name`], with all its names.
    ///
    /// Returns the number of entries removed; zero when nothing matched.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let found = self.find_by_name(name).and_then(HostEntry::address).map(str::to_string);
        self.remove_address(found)
    }

    fn remove_address(&mut self, address: Option<String>) -> usize {
        let Some(address) = address else {
            return 0;
        };

        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.address() != Some(address.as_str()));
        let removed = before - self.entries.len();

        tracing::debug!("Removed {removed} entries for {address}");
        removed
    }
}
