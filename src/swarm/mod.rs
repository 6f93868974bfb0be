//! Per-swarm state and the rewrite policy built on top of it.
//!
//! The proxy remembers, for every swarm it has seen a tracker reply for, the
//! last seeder count the tracker reported. The rewrite policy uses that count
//! to pick the upload multiplier for the next announce of the same swarm.
//!
//! # Thread Safety
//!
//! [`structs::swarm_state::SwarmState`] is a cheap to clone handle around an
//! `Arc<RwLock<..>>` from `parking_lot`, shared by every connection handler.
//! Two concurrent announces for the same swarm may both read the count from
//! before either reply was processed; only successfully decoded replies ever
//! write to it.

/// Swarm identifier, state store and rewrite decision structures.
pub mod structs;

/// Implementation blocks for the swarm structures.
pub mod impls;

/// Type aliases for the swarm module.
pub mod types;

/// Multiplier selection.
pub mod policy;
