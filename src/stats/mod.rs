//! Real-time statistics for the proxy.
//!
//! Every connection handler reports what happened to its connection through
//! [`enums::stats_event::StatsEvent`]. The counters are plain atomics, so
//! handlers never block each other when updating them. A snapshot is written
//! to the log every `log_console_interval` seconds.
//!
//! # Example
//!
//! ```rust,ignore
//! use ratio_ghost::stats::enums::stats_event::StatsEvent;
//!
//! state.update_stats(StatsEvent::AnnouncesRewritten, 1);
//! let stats = state.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
