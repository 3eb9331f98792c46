//! Application execution logic.
//!
//! This module loads the hosts file, performs the configured action,
//! and prints results or writes the file back.

use std::io::{self, Write};

use thiserror::Error;

use hostsfile::config::{Action, ConfigError, Lookup, ValidatedConfig, write_default_config};
use hostsfile::hosts::{HostEntry, Insertion};
use hostsfile::path::PathSource;
use hostsfile::storage::ContentStore;
use hostsfile::{Hosts, HostsError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Loading or saving the hosts file failed.
    #[error(transparent)]
    Hosts(#[from] HostsError),

    /// Writing the configuration template failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing to standard output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Serializing entries to JSON failed.
    #[error("Failed to serialize entries: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output options extracted from validated config.
///
/// Holds only what the action handlers need, so the action can be moved
/// out of the config separately.
#[derive(Debug, Clone, Copy)]
struct OutputOptions {
    json: bool,
    dry_run: bool,
}

impl From<&ValidatedConfig> for OutputOptions {
    fn from(config: &ValidatedConfig) -> Self {
        Self {
            json: config.json,
            dry_run: config.dry_run,
        }
    }
}

/// Executes the configured action, printing to standard output.
///
/// # Errors
///
/// Returns an error if the hosts file cannot be loaded or saved, or if
/// output cannot be written.
pub fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_to(config, &mut out)
}

/// Executes the configured action, printing to `out`.
///
/// With an explicit hosts file path the file must already exist; otherwise
/// the platform default location is used.
///
/// # Errors
///
/// See [`execute`].
pub fn execute_to<W: Write>(config: ValidatedConfig, out: &mut W) -> Result<(), RunError> {
    let options = OutputOptions::from(&config);

    if options.dry_run && config.action.is_mutation() {
        tracing::info!("Dry-run mode enabled - the hosts file will be printed, not written");
    }

    match (config.action, config.hosts_file) {
        (Action::Init { output }, _) => {
            write_default_config(&output)?;
            writeln!(out, "Configuration template written to: {}", output.display())?;
            Ok(())
        }
        (action, Some(path)) => {
            let mut hosts = Hosts::import(path)?;
            apply(&mut hosts, action, options, out)
        }
        (action, None) => {
            let mut hosts = Hosts::initialize()?;
            apply(&mut hosts, action, options, out)
        }
    }
}

/// Runs one action against a loaded registry.
fn apply<P, S, W>(
    hosts: &mut Hosts<P, S>,
    action: Action,
    options: OutputOptions,
    out: &mut W,
) -> Result<(), RunError>
where
    P: PathSource,
    S: ContentStore,
    W: Write,
{
    match action {
        Action::List { filter } => {
            let selected: Vec<&HostEntry> = hosts
                .entries()
                .iter()
                .filter(|entry| {
                    filter
                        .as_ref()
                        .is_none_or(|re| entry.names().iter().any(|name| re.is_match(name)))
                })
                .collect();
            print_entries(&selected, options, out)
        }
        Action::Find(lookup) => {
            let found = match &lookup {
                Lookup::Name(name) => hosts.find_by_name(name),
                Lookup::Ip(ip) => hosts.find_by_ip(ip),
            };
            match found {
                Some(entry) => print_entries(&[entry], options, out),
                None => {
                    writeln!(out, "not found")?;
                    Ok(())
                }
            }
        }
        Action::Add(entry) => {
            let address = entry.address().unwrap_or_default().to_string();
            match hosts.add(entry) {
                Insertion::Merged(_) => tracing::info!("Added names to existing entry {address}"),
                Insertion::Appended => tracing::info!("Added new entry {address}"),
            }
            commit(hosts, options, out)
        }
        Action::Remove(lookup) => {
            let removed = match &lookup {
                Lookup::Name(name) => hosts.remove_by_name(name),
                Lookup::Ip(ip) => hosts.remove_by_ip(ip),
            };
            if removed == 0 {
                tracing::info!("No entry matches {lookup}, nothing to remove");
                return Ok(());
            }
            tracing::info!("Removed entry matching {lookup}");
            commit(hosts, options, out)
        }
        Action::Init { .. } => Ok(()),
    }
}

fn print_entries<W: Write>(
    entries: &[&HostEntry],
    options: OutputOptions,
    out: &mut W,
) -> Result<(), RunError> {
    if options.json {
        serde_json::to_writer_pretty(&mut *out, entries)?;
        writeln!(out)?;
    } else {
        for entry in entries {
            writeln!(out, "{entry}")?;
        }
    }
    Ok(())
}

/// Saves the registry, or prints the would-be file content in dry-run mode.
fn commit<P, S, W>(hosts: &Hosts<P, S>, options: OutputOptions, out: &mut W) -> Result<(), RunError>
where
    P: PathSource,
    S: ContentStore,
    W: Write,
{
    if options.dry_run {
        write!(out, "{}", hosts.render())?;
        return Ok(());
    }

    hosts.save()?;
    tracing::info!("Wrote {} entries to {}", hosts.count(), hosts.path().display());
    Ok(())
}
