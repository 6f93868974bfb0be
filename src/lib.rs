//! # Ratio Ghost
//!
//! A transparent HTTP proxy for BitTorrent tracker announces that rewrites the
//! transfer statistics a client reports before they reach the tracker.
//!
//! ## Overview
//!
//! A BitTorrent client is pointed at the proxy as its HTTP proxy. Every
//! tracker announce it sends arrives in absolute-URI form; the proxy scales
//! the `uploaded` counter by a per-swarm multiplier, optionally zeroes
//! `downloaded` and `left`, forwards the request to the tracker and relays the
//! raw reply back. Seeder counts read from each reply decide the multiplier
//! used for the next announce of the same swarm.
//!
//! ## Features
//!
//! - **Two-tier multiplier**: a low multiplier for sparse or unknown swarms,
//!   a high one once the recorded seeder count reaches a threshold
//! - **Download suppression**: report `downloaded=0`
//! - **Pretend seeding**: report `left=0`
//! - **Hot policy reload**: re-read the policy from the config file on SIGHUP
//! - **Monitoring**: periodic console statistics and Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ratio_ghost::config::structs::configuration::Configuration;
//! use ratio_ghost::proxy::proxy::proxy_service;
//! use ratio_ghost::proxy::structs::proxy_state::ProxyState;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", true)?);
//! let state = Arc::new(ProxyState::new(config));
//! let (tx, rx) = tokio::sync::watch::channel(false);
//! let (address, handle) = proxy_service(state, rx).await?;
//! ```
//!
//! ## Modules
//!
//! - [`bencode`] - Bencode decoder for tracker replies
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`proxy`] - Listener, announce interception and forwarding
//! - [`stats`] - Runtime counters
//! - [`structs`] - CLI argument parsing
//! - [`swarm`] - Per-swarm seeder counts and the multiplier policy

/// Bencode decoding module.
///
/// Turns tracker replies into a value tree of integers, byte strings, lists
/// and dictionaries.
pub mod bencode;

/// Common utilities and shared functionality.
///
/// Contains logging setup, lossy request decoding and time helpers.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and saving the TOML configuration, including
/// the rewrite policy that can be reloaded while running.
pub mod config;

/// The announce proxy.
///
/// Accepts client connections, rewrites announces, forwards them upstream
/// and relays replies while recording seeder counts.
pub mod proxy;

/// Statistics tracking module.
///
/// Counts connections, rewrites and failures for the console log.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Swarm state and multiplier policy.
///
/// Holds the last seeder count seen for each swarm and turns it into a
/// rewrite decision.
pub mod swarm;
