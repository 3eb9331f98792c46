//! Hosts file text parsing.
//!
//! Parsing never fails: malformed address tokens degrade to
//! [`AddressFamily::Unknown`](super::AddressFamily::Unknown) and the line is
//! still kept as an address record.

use super::entry::{COMMENT_MARKER, HostEntry};

/// Outcome of inserting an entry with [`merge_or_append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The entry was pushed to the end of the sequence.
    Appended,
    /// The entry's names were folded into an existing entry at this index.
    Merged(usize),
}

/// Parses hosts file content into an ordered, deduplicated entry sequence.
///
/// Lines are split on LF or CRLF. Blank lines are skipped. Records sharing
/// a literal address are merged into the first occurrence.
#[must_use]
pub fn parse(content: &str) -> Vec<HostEntry> {
    let mut entries = Vec::new();

    for line in content.lines() {
        if let Some(entry) = parse_line(line) {
            merge_or_append(&mut entries, entry);
        }
    }

    entries
}

/// Parses a single line, returning `None` for blank lines.
///
/// Every leading `#` is stripped from a comment, so `"## note"` and
/// `"#note"` both yield the text `"note"`.
#[must_use]
pub fn parse_line(line: &str) -> Option<HostEntry> {
    let mut tokens = split_tokens(line);
    let first = tokens.next()?;

    if first.starts_with(COMMENT_MARKER) {
        let joined = split_tokens(line).collect::<Vec<_>>().join(" ");
        let text = joined.trim_start_matches(COMMENT_MARKER).trim();
        return Some(HostEntry::for_comment(text));
    }

    let names = tokens.map(str::to_string).collect();
    Some(HostEntry::classified(first, names))
}

/// Returns true for characters that separate tokens on a line.
///
/// ASCII whitespace plus vertical tab, which `char::is_ascii_whitespace`
/// leaves out.
#[must_use]
pub const fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|token| !token.is_empty())
}

/// Inserts `entry` into `entries`, merging on an equal literal address.
///
/// If `entry` is an address entry and an address entry with the same
/// address string already exists, the new names are appended to the
/// existing one and the sequence does not grow. Comments are always
/// appended and are never merge targets.
pub fn merge_or_append(entries: &mut Vec<HostEntry>, entry: HostEntry) -> Insertion {
    let existing = entry
        .address()
        .and_then(|address| entries.iter().position(|e| e.address() == Some(address)));

    match existing {
        Some(index) => {
            tracing::trace!(
                "Merging names into existing entry for {}",
                entry.address().unwrap_or_default()
            );
            entries[index].absorb_names(entry);
            Insertion::Merged(index)
        }
        None => {
            entries.push(entry);
            Insertion::Appended
        }
    }
}
