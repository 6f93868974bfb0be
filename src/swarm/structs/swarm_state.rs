use std::sync::Arc;
use parking_lot::RwLock;
use crate::swarm::structs::swarm_id::SwarmId;
use crate::swarm::types::AHashMap;

/// Last known seeder count per swarm. Entries are never evicted.
#[derive(Debug, Clone, Default)]
pub struct SwarmState {
    pub(crate) seeders: Arc<RwLock<AHashMap<SwarmId, i64>>>,
}
