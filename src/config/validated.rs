//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::hosts::{COMMENT_MARKER, HostEntry, is_separator};

use super::cli::{Cli, Command, LookupArgs};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Lookup key for `find` and `remove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Exact host name match.
    Name(String),
    /// Exact literal address match.
    Ip(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name {name}"),
            Self::Ip(ip) => write!(f, "address {ip}"),
        }
    }
}

/// The operation to perform, with its arguments validated.
#[derive(Debug)]
pub enum Action {
    /// Print entries, optionally only those with a name matching the filter.
    List {
        /// Compiled `--match` pattern
        filter: Option<Regex>,
    },
    /// Print the first entry matching the lookup.
    Find(Lookup),
    /// Add an entry and save.
    Add(HostEntry),
    /// Remove the matching address and save.
    Remove(Lookup),
    /// Write the configuration template.
    Init {
        /// Output path for the template
        output: PathBuf,
    },
}

impl Action {
    /// Returns true if this action rewrites the hosts file.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::Add(_) | Self::Remove(_))
    }

    /// Short name used in log output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Find(_) => "find",
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::Init { .. } => "init",
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Explicit hosts file path. `None` selects the platform default.
    pub hosts_file: Option<PathBuf>,

    /// The operation to perform
    pub action: Action,

    /// Print entries as JSON
    pub json: bool,

    /// Print the resulting file instead of writing it
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hosts_file_str = self
            .hosts_file
            .as_ref()
            .map_or_else(|| "default".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ action: {}, hosts_file: {}, json: {}, dry_run: {} }}",
            self.action.label(),
            hosts_file_str,
            self.json,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `--match` pattern is not a valid regex
    /// - An address or name given to `add` cannot be written as one token
    /// - A lookup has neither a name nor an address
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let action = Self::resolve_action(&cli.command)?;

        let hosts_file = Self::resolve_hosts_file(cli, toml);

        // OR semantics: either source can enable JSON output
        let json = cli.json || toml.map_or(defaults::JSON_OUTPUT, |t| t.output.json);

        Ok(Self {
            hosts_file,
            action,
            json,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path. The
    /// `init` command never reads a config file, so a broken file does not
    /// prevent regenerating it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = match cli.config {
            Some(ref path) if !cli.is_init() => Some(TomlConfig::load(path)?),
            _ => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_action(command: &Command) -> Result<Action, ConfigError> {
        match command {
            Command::List { pattern } => {
                let filter = pattern.as_deref().map(compile_pattern).transpose()?;
                Ok(Action::List { filter })
            }
            Command::Find(args) => Ok(Action::Find(resolve_lookup(args)?)),
            Command::Add { address, names } => Ok(Action::Add(build_entry(address, names)?)),
            Command::Remove(args) => Ok(Action::Remove(resolve_lookup(args)?)),
            Command::Init { output } => Ok(Action::Init {
                output: output.clone(),
            }),
        }
    }

    fn resolve_hosts_file(cli: &Cli, toml: Option<&TomlConfig>) -> Option<PathBuf> {
        // CLI takes precedence
        if let Some(ref path) = cli.file {
            return Some(expand_tilde(path));
        }

        // Fall back to TOML
        toml.and_then(|t| t.hosts.path.as_deref())
            .map(|p| expand_tilde(Path::new(p)))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

fn resolve_lookup(args: &LookupArgs) -> Result<Lookup, ConfigError> {
    match (&args.name, &args.ip) {
        (Some(name), _) => Ok(Lookup::Name(name.clone())),
        (None, Some(ip)) => Ok(Lookup::Ip(ip.clone())),
        (None, None) => Err(ConfigError::missing(
            field::LOOKUP,
            "Use --name or --ip to select an entry",
        )),
    }
}

/// Builds the entry for `add`, rejecting values that would not survive a
/// write and re-read as the same record.
fn build_entry(address: &str, names: &[String]) -> Result<HostEntry, ConfigError> {
    if names.is_empty() {
        return Err(ConfigError::missing(
            field::NAMES,
            "Give at least one host name after the address",
        ));
    }

    check_token(address)?;
    if address.starts_with(COMMENT_MARKER) {
        return Err(ConfigError::InvalidEntry {
            value: address.to_string(),
            reason: "an address cannot start with '#'",
        });
    }

    for name in names {
        check_token(name)?;
    }

    Ok(HostEntry::classified(address, names.to_vec()))
}

fn check_token(value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidEntry {
            value: value.to_string(),
            reason: "must not be empty",
        });
    }
    if value.chars().any(is_separator) {
        return Err(ConfigError::InvalidEntry {
            value: value.to_string(),
            reason: "must not contain whitespace",
        });
    }
    Ok(())
}

/// Expands a leading `~` to the home directory. Other paths are returned
/// unchanged, as is everything when no home directory is known.
fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
