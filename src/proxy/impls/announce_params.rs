use crate::proxy::proxy::{DOWNLOADED, EVENT, INFO_HASH, LEFT, UPLOADED};
use crate::proxy::structs::announce_params::AnnounceParams;
use crate::proxy::structs::query_string::QueryString;
use crate::swarm::structs::swarm_id::SwarmId;

impl AnnounceParams {
    pub fn from_query(query: &QueryString) -> AnnounceParams
    {
        let field = |key: &str| query.get(key).map(str::to_string);
        AnnounceParams {
            uploaded: field(UPLOADED),
            downloaded: field(DOWNLOADED),
            left: field(LEFT),
            info_hash: query.get(INFO_HASH).map(SwarmId::from),
            event: field(EVENT),
        }
    }
}
