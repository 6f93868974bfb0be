use crate::swarm::structs::swarm_id::SwarmId;

/// The announce fields the proxy looks at. A field is `None` when the query
/// string does not contain it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnounceParams {
    pub uploaded: Option<String>,
    pub downloaded: Option<String>,
    pub left: Option<String>,
    pub info_hash: Option<SwarmId>,
    pub event: Option<String>,
}
