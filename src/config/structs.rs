//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Listener and upstream connection settings.
pub mod proxy_config;

/// Rewrite policy settings (multipliers, threshold, suppression flags).
pub mod policy_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
