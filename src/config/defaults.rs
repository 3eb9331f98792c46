//! Default values for configuration options.

/// Default output path for the `init` subcommand.
pub const CONFIG_FILE: &str = "hostsfile.toml";

/// Whether listings are printed as JSON when neither CLI nor TOML says so.
pub const JSON_OUTPUT: bool = false;
