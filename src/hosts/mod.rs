//! Hosts file model, parsing and rendering.
//!
//! This module provides:
//! - Address classification ([`AddressFamily`], [`classify`])
//! - The record model ([`HostEntry`])
//! - Text parsing with same-address merging ([`parse`], [`merge_or_append`])
//! - Text rendering ([`render`])
//!
//! # File Format
//!
//! One record per line. A line whose first token starts with `#` is a
//! comment; any other non-blank line is an address followed by host names.
//! LF and CRLF are accepted on read, LF is written. Blank lines are dropped.

mod address;
mod entry;
mod parser;
mod render;


pub use address::{AddressFamily, classify};
pub use entry::{COMMENT_MARKER, HostEntry};
pub use parser::{Insertion, is_separator, merge_or_append, parse, parse_line};
pub use render::render;
