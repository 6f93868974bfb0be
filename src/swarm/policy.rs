use crate::config::structs::policy_config::PolicyConfig;
use crate::swarm::structs::rewrite_decision::RewriteDecision;
use crate::swarm::structs::swarm_id::SwarmId;
use crate::swarm::structs::swarm_state::SwarmState;

/// Picks the upload multiplier for an announce of `swarm_id`.
///
/// `multiplier_high` applies only when a seeder count has been recorded for the
/// swarm and it reaches `seeder_threshold`. Unknown swarms get `multiplier_low`.
pub fn select_multiplier(swarm_id: &SwarmId, swarms: &SwarmState, policy: &PolicyConfig) -> f64 {
    match swarms.get(swarm_id) {
        Some(seeders) if seeders >= policy.seeder_threshold => policy.multiplier_high,
        _ => policy.multiplier_low,
    }
}

pub fn decide(swarm_id: &SwarmId, swarms: &SwarmState, policy: &PolicyConfig) -> RewriteDecision {
    RewriteDecision {
        multiplier: select_multiplier(swarm_id, swarms, policy),
        suppress_download: policy.suppress_download,
        pretend_fully_seeded: policy.pretend_fully_seeded,
        upload_format: policy.upload_format,
    }
}
