pub mod swarm_id;
pub mod swarm_state;
