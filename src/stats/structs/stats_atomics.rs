use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub connections_handled: AtomicI64,
    pub connections_active: AtomicI64,
    pub announces_rewritten: AtomicI64,
    pub requests_ignored: AtomicI64,
    pub resolve_failures: AtomicI64,
    pub forward_failures: AtomicI64,
    pub decode_failures: AtomicI64,
    pub swarm_updates: AtomicI64,
    pub replies_relayed: AtomicI64,
    pub handler_errors: AtomicI64,
}
