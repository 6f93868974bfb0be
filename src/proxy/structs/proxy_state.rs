use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::policy_config::PolicyConfig;
use crate::proxy::traits::tracker_forwarder::TrackerForwarder;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::swarm::structs::swarm_state::SwarmState;

/// Everything a connection handler shares with the rest of the process.
///
/// `policy` starts out as `config.policy_config` and may be replaced at any
/// time; handlers copy it once per request.
pub struct ProxyState {
    pub config: Arc<Configuration>,
    pub policy: Arc<RwLock<PolicyConfig>>,
    pub swarms: SwarmState,
    pub stats: Arc<StatsAtomics>,
    pub forwarder: Arc<dyn TrackerForwarder>,
}
