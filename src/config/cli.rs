//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::defaults;

/// hostsfile: inspect and edit the system hosts file
///
/// Reads the hosts file, merges records that share an address, and writes
/// it back as one tab-separated record per line.
#[derive(Debug, Parser)]
#[command(name = "hostsfile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to the hosts file (defaults to the platform location)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Print entries as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print the resulting file instead of writing it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for hostsfile
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all entries in file order
    List {
        /// Only show address entries with a name matching this regex
        #[arg(long = "match", value_name = "REGEX")]
        pattern: Option<String>,
    },

    /// Show the first entry matching a name or an address
    Find(LookupArgs),

    /// Add names to an address, merging with an existing entry
    Add {
        /// Literal address, e.g. 127.0.0.1 or ::1
        address: String,

        /// Host names for the address
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Remove the entry matching a name or an address
    Remove(LookupArgs),

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Lookup key shared by `find` and `remove`.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct LookupArgs {
    /// Host name to look up (exact match)
    #[arg(long)]
    pub name: Option<String>,

    /// Literal address to look up (exact match)
    #[arg(long)]
    pub ip: Option<String>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
