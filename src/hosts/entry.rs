//! In-memory representation of a single hosts file record.

use std::fmt;

use serde::Serialize;

use super::address::{AddressFamily, classify};

/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '#';

/// One logical line of a hosts file.
///
/// A record is either an address mapped to host names, or a standalone
/// comment. Blank lines have no representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HostEntry {
    /// An address followed by the names that resolve to it.
    Address {
        /// Family derived from the literal address.
        family: AddressFamily,
        /// The literal address exactly as written.
        address: String,
        /// Host names in insertion order. Duplicates are kept.
        names: Vec<String>,
    },

    /// A comment line, without its leading marker.
    Comment {
        /// Comment body with markers and surrounding whitespace stripped.
        text: String,
    },
}

impl HostEntry {
    /// Creates an address entry with an explicit family.
    #[must_use]
    pub fn for_address(
        family: AddressFamily,
        address: impl Into<String>,
        names: Vec<String>,
    ) -> Self {
        Self::Address {
            family,
            address: address.into(),
            names,
        }
    }

    /// Creates an address entry, deriving the family from the address text.
    #[must_use]
    pub fn classified(address: impl Into<String>, names: Vec<String>) -> Self {
        let address = address.into();
        let family = classify(&address);
        Self::for_address(family, address, names)
    }

    /// Creates a comment entry.
    #[must_use]
    pub fn for_comment(text: impl Into<String>) -> Self {
        Self::Comment { text: text.into() }
    }

    /// Returns true if this is an address entry.
    #[must_use]
    pub const fn is_address_entry(&self) -> bool {
        matches!(self, Self::Address { .. })
    }

    /// Returns the literal address, or `None` for comments.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Address { address, .. } => Some(address),
            Self::Comment { .. } => None,
        }
    }

    /// Returns the address family, or `None` for comments.
    #[must_use]
    pub const fn family(&self) -> Option<AddressFamily> {
        match self {
            Self::Address { family, .. } => Some(*family),
            Self::Comment { .. } => None,
        }
    }

    /// Returns the host names. Comments have none.
    #[must_use]
    pub fn names(&self) -> &[String] {
        match self {
            Self::Address { names, .. } => names,
            Self::Comment { .. } => &[],
        }
    }

    /// Returns the comment text, or `None` for address entries.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        match self {
            Self::Address { .. } => None,
            Self::Comment { text } => Some(text),
        }
    }

    /// Returns true if `name` is one of this entry's host names (exact match).
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.names().iter().any(|n| n == name)
    }

    /// Appends the names of `other` after this entry's own names.
    ///
    /// Only address entries carry names; when either side is a comment
    /// nothing changes.
    pub fn absorb_names(&mut self, other: Self) {
        if let (Self::Address { names, .. }, Self::Address { names: incoming, .. }) =
            (self, other)
        {
            names.extend(incoming);
        }
    }

    /// Renders the entry as one line of hosts file text, terminator included.
    #[must_use]
    pub fn render_line(&self) -> String {
        format!("{self}\n")
    }
}

/// Formats the entry as it appears in the file, without the line terminator.
impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address { address, names, .. } => write!(f, "{address}\t{}", names.join(" ")),
            Self::Comment { text } => write!(f, "{COMMENT_MARKER} {text}"),
        }
    }
}
