use crate::proxy::structs::upstream::Upstream;
use crate::swarm::structs::rewrite_decision::RewriteDecision;
use crate::swarm::structs::swarm_id::SwarmId;

#[derive(Debug, Clone)]
pub struct InterceptedAnnounce {
    pub swarm_id: SwarmId,
    pub upstream: Upstream,
    /// The complete request to send upstream, headers included.
    pub request: String,
    pub decision: RewriteDecision,
    pub original_uploaded: Option<String>,
    pub rewritten_uploaded: Option<String>,
}
