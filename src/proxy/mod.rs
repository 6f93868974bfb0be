//! Announce interception and forwarding.
//!
//! This module implements the proxy itself: a TCP listener that accepts
//! plain HTTP tracker announces sent in absolute-URI proxy form, rewrites the
//! transfer counters in their query strings, forwards them to the tracker
//! named in the URI and relays the tracker's reply back to the client.
//!
//! # Request Flow
//!
//! ```text
//!  client ──► ProxyServer ──► ProxyState::handle_connection
//!                                   │
//!                                   ├─► intercept()        parse + rewrite
//!                                   ├─► TrackerForwarder    upstream round trip
//!                                   ├─► TrackerReply        decode, update swarm state
//!                                   └─► client              relay raw reply
//! ```
//!
//! # Accepted Requests
//!
//! Only `GET http://host[:port]/path?query HTTP/1.x` requests carrying an
//! `info_hash` field are forwarded. Everything else is closed without a
//! reply, since no upstream can be derived from it.
//!
//! # Rewriting
//!
//! - `uploaded` is multiplied by the multiplier the swarm policy selects
//! - `downloaded` becomes `0` when download reports are suppressed
//! - `left` becomes `0` when the client pretends to be fully seeded
//!
//! Query values are never percent-decoded; all other fields are forwarded
//! byte for byte.

/// Error and outcome enumerations.
pub mod enums;

/// Data structures for requests, replies and the server.
pub mod structs;

/// Implementation blocks for the proxy structures.
pub mod impls;

/// The upstream forwarding seam.
pub mod traits;

/// Interception entry point and service startup.
#[allow(clippy::module_inception)]
pub mod proxy;

/// Unit tests for interception and connection handling.
pub mod tests;
