//! Configuration management module.
//!
//! This module handles loading, parsing, saving and validating the proxy
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml` by default) contains sections for:
//! - **proxy_config**: Listener and upstream connection settings
//! - **policy_config**: The rewrite policy applied to announce requests
//! - **sentry_config**: Error reporting configuration
//!
//! The policy section is the only part that can change while the proxy runs.
//! It is re-read from disk on `SIGHUP` and swapped into the shared proxy state.
//!
//! # Example
//!
//! ```rust,ignore
//! use ratio_ghost::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", true)?;
//! println!("{}", config.proxy_config.bind_address);
//! ```

/// Configuration enumerations (upload formatting, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
