use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::config::structs::policy_config::PolicyConfig;
use crate::proxy::enums::intercept_error::InterceptError;
use crate::proxy::structs::announce_request::AnnounceRequest;
use crate::proxy::structs::intercepted_announce::InterceptedAnnounce;
use crate::proxy::structs::proxy_server::ProxyServer;
use crate::proxy::structs::proxy_state::ProxyState;
use crate::swarm::policy::decide;
use crate::swarm::structs::swarm_state::SwarmState;

pub const INFO_HASH: &str = "info_hash";
pub const UPLOADED: &str = "uploaded";
pub const DOWNLOADED: &str = "downloaded";
pub const LEFT: &str = "left";
pub const EVENT: &str = "event";

pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Turns the text of a proxied announce into the request to send upstream.
///
/// The multiplier comes from the seeder count last recorded for the swarm in
/// `swarms`, which this function only reads.
pub fn intercept(text: &str, swarms: &SwarmState, policy: &PolicyConfig) -> Result<InterceptedAnnounce, InterceptError>
{
    let request = AnnounceRequest::parse(text)?;
    let swarm_id = request.params.info_hash.clone().ok_or(InterceptError::MissingSwarmId)?;
    let decision = decide(&swarm_id, swarms, policy);
    let query = request.rewritten_query(&decision);
    let rewritten_uploaded = request.params.uploaded.as_ref()
        .and(query.get(UPLOADED))
        .map(str::to_string);

    Ok(InterceptedAnnounce {
        swarm_id,
        upstream: request.upstream.clone(),
        request: request.upstream_request(&query),
        decision,
        original_uploaded: request.params.uploaded.clone(),
        rewritten_uploaded,
    })
}

/// Binds the listener and serves it on a background task until `rx` changes.
/// Returns the bound address, which differs from the configured one when
/// port 0 was asked for.
pub async fn proxy_service(state: Arc<ProxyState>, rx: watch::Receiver<bool>) -> io::Result<(SocketAddr, JoinHandle<()>)>
{
    let server = ProxyServer::new(state).await?;
    let address = server.local_addr()?;
    info!("[PROXY] Starting server listener on {address}");
    let handle = tokio::spawn(async move {
        server.start(rx).await;
    });
    Ok((address, handle))
}
