//! hostsfile: operating system hosts file management
//!
//! A library for reading the hosts file into an ordered in-memory model,
//! querying and editing it, and writing it back.
//!
//! ```ignore
//! use hostsfile::{HostEntry, Hosts};
//!
//! let mut hosts = Hosts::import("/etc/hosts")?;
//! hosts.add(HostEntry::classified("127.0.0.1", vec!["dev.test".to_string()]));
//! hosts.save()?;
//! ```

pub mod config;
pub mod hosts;
pub mod path;
pub mod registry;
pub mod storage;

pub use hosts::{AddressFamily, HostEntry};
pub use registry::{Hosts, HostsError};
