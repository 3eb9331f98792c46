//! Address family classification for hosts file address tokens.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use serde::Serialize;

/// Address family of a literal address token.
///
/// Derived purely from the textual form of the token. An `Unknown` family
/// does not make a record invalid: the literal string is still the lookup
/// and merge key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// Dotted-quad IPv4 address.
    Ipv4,
    /// Colon-hex IPv6 address, including `::` compression.
    Ipv6,
    /// Neither form could be parsed.
    Unknown,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4 => write!(f, "IPv4"),
            Self::Ipv6 => write!(f, "IPv6"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Classifies a token as IPv4, IPv6 or neither.
///
/// Never fails. Zone identifiers (`fe80::1%eth0`) are not supported and
/// classify as [`AddressFamily::Unknown`].
#[must_use]
pub fn classify(token: &str) -> AddressFamily {
    if token.parse::<Ipv4Addr>().is_ok() {
        AddressFamily::Ipv4
    } else if token.parse::<Ipv6Addr>().is_ok() {
        AddressFamily::Ipv6
    } else {
        AddressFamily::Unknown
    }
}
