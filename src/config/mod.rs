//! Configuration layer for hostsfile.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`Action`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - The platform hosts file location
//!
//! An explicit hosts file path (from either source) must point to an
//! existing file. Without one, the platform default location is used.
//!
//! # Boolean Flag Semantics
//!
//! `--json` uses OR semantics: if set in either CLI or TOML, the result is
//! `true`. Flags only enable, never disable.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, LookupArgs};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{Action, Lookup, ValidatedConfig, write_default_config};
