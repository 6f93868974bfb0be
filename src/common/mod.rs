//! Helpers shared across the proxy.
//!
//! # Utilities
//!
//! - Logging setup
//! - Lossy decoding of client request bytes

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
