use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub connections_handled: i64,
    pub connections_active: i64,
    pub announces_rewritten: i64,
    pub requests_ignored: i64,
    pub resolve_failures: i64,
    pub forward_failures: i64,
    pub decode_failures: i64,
    pub swarm_updates: i64,
    pub replies_relayed: i64,
    pub handler_errors: i64,
}
