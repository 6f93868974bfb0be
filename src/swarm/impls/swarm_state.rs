use crate::swarm::structs::swarm_id::SwarmId;
use crate::swarm::structs::swarm_state::SwarmState;

impl SwarmState {
    pub fn new() -> SwarmState {
        SwarmState::default()
    }

    /// Returns the last seeder count recorded for `swarm_id`, if any.
    pub fn get(&self, swarm_id: &SwarmId) -> Option<i64> {
        self.seeders.read().get(swarm_id).copied()
    }

    /// Records `seeders` for `swarm_id`, returning the previous count.
    pub fn set(&self, swarm_id: SwarmId, seeders: i64) -> Option<i64> {
        self.seeders.write().insert(swarm_id, seeders)
    }

    pub fn len(&self) -> usize {
        self.seeders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeders.read().is_empty()
    }
}
