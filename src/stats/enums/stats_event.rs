use serde::{Deserialize, Serialize};

/// Counters that connection handlers update.
///
/// `ConnectionsActive` goes up and down, every other event only counts up.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    ConnectionsHandled,
    ConnectionsActive,
    AnnouncesRewritten,
    RequestsIgnored,
    ResolveFailures,
    ForwardFailures,
    DecodeFailures,
    SwarmUpdates,
    RepliesRelayed,
    HandlerErrors,
}
