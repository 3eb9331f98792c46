//! Hosts file text rendering.

use super::entry::HostEntry;

/// Renders entries back into hosts file text.
///
/// Each entry contributes exactly one LF-terminated line, in sequence
/// order. An empty sequence renders as an empty string.
#[must_use]
pub fn render(entries: &[HostEntry]) -> String {
    entries.iter().map(HostEntry::render_line).collect()
}
