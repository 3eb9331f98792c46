//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Hosts file location section
    #[serde(default)]
    pub hosts: HostsSection,

    /// Output formatting section
    #[serde(default)]
    pub output: OutputSection,
}

/// Hosts file location section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostsSection {
    /// Path to the hosts file; `~` expands to the home directory
    pub path: Option<String>,
}

/// Output formatting section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Print entries as JSON
    #[serde(default)]
    pub json: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# hostsfile Configuration File

[hosts]
# Path to the hosts file (default: platform location)
# Linux/macOS: /etc/hosts
# Windows:     C:\Windows\System32\drivers\etc\hosts
# A leading "~" expands to the home directory.
# Can be overridden by the --file CLI flag.
# path = "~/hosts.test"

[output]
# Print entries as JSON (default: false)
# json = false
"#
    .to_string()
}
