use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::common::common::decode_request_text;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::policy_config::PolicyConfig;
use crate::proxy::enums::handle_outcome::HandleOutcome;
use crate::proxy::enums::proxy_error::ProxyError;
use crate::proxy::proxy::intercept;
use crate::proxy::structs::proxy_state::ProxyState;
use crate::proxy::structs::reply_summary::ReplySummary;
use crate::proxy::structs::tcp_forwarder::TcpForwarder;
use crate::proxy::structs::tracker_reply::TrackerReply;
use crate::proxy::traits::tracker_forwarder::TrackerForwarder;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::swarm::structs::swarm_id::SwarmId;
use crate::swarm::structs::swarm_state::SwarmState;

impl ProxyState {
    pub fn new(config: Arc<Configuration>) -> ProxyState
    {
        let forwarder = Arc::new(TcpForwarder::from_config(&config.proxy_config));
        ProxyState::with_forwarder(config, forwarder)
    }

    pub fn with_forwarder(config: Arc<Configuration>, forwarder: Arc<dyn TrackerForwarder>) -> ProxyState
    {
        let stats = StatsAtomics::default();
        stats.started.store(chrono::Utc::now().timestamp(), Ordering::SeqCst);
        ProxyState {
            policy: Arc::new(RwLock::new(config.policy_config.clone())),
            config,
            swarms: SwarmState::new(),
            stats: Arc::new(stats),
            forwarder,
        }
    }

    /// A copy of the policy in force right now.
    pub fn policy(&self) -> PolicyConfig
    {
        self.policy.read().clone()
    }

    /// Replaces the policy. Requests already past interception keep the copy
    /// they started with.
    pub fn set_policy(&self, policy: PolicyConfig)
    {
        info!(
            "[POLICY] Settings updated: low={} high={} threshold={} no_download={} pretend_seeded={} upload_format={:?}",
            policy.multiplier_low,
            policy.multiplier_high,
            policy.seeder_threshold,
            policy.suppress_download,
            policy.pretend_fully_seeded,
            policy.upload_format
        );
        *self.policy.write() = policy;
    }

    /// Reads the `[policy_config]` table from `path` and applies it. The
    /// current policy stays in place when the file cannot be used.
    pub fn reload_policy_from(&self, path: &str) -> Result<PolicyConfig, ConfigurationError>
    {
        let policy = Configuration::reload_policy(path)?;
        self.set_policy(policy.clone());
        Ok(policy)
    }

    /// Serves one client connection from first read to close.
    ///
    /// Never panics or propagates: every failure ends in a log line and a
    /// closed stream.
    pub async fn handle_connection<S>(&self, mut stream: S, peer: SocketAddr) -> Option<HandleOutcome>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send,
    {
        self.update_stats(StatsEvent::ConnectionsHandled, 1);
        self.update_stats(StatsEvent::ConnectionsActive, 1);
        debug!("[PROXY] Connection from {peer}");

        let outcome = match self.process_connection(&mut stream, peer).await {
            Ok(outcome) => {
                self.record_outcome(peer, &outcome);
                Some(outcome)
            }
            Err(error) => {
                self.update_stats(StatsEvent::HandlerErrors, 1);
                sentry::capture_error(&error);
                error!("[PROXY] Connection from {peer} failed: {error}");
                None
            }
        };

        if let Err(error) = stream.shutdown().await {
            debug!("[PROXY] Closing connection to {peer} failed: {error}");
        }
        self.update_stats(StatsEvent::ConnectionsActive, -1);
        outcome
    }

    async fn process_connection<S>(&self, stream: &mut S, peer: SocketAddr) -> Result<HandleOutcome, ProxyError>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send,
    {
        let mut buffer = vec![0u8; self.config.proxy_config.read_buffer_size];
        let read = stream.read(&mut buffer).await.map_err(ProxyError::ClientRead)?;
        if read == 0 {
            return Ok(HandleOutcome::Empty);
        }
        let text = decode_request_text(&buffer[..read]);

        let policy = self.policy();
        let announce = match intercept(&text, &self.swarms, &policy) {
            Ok(announce) => announce,
            Err(reason) if reason.is_ineligible() => return Ok(HandleOutcome::Ignored(reason)),
            Err(reason) => return Ok(HandleOutcome::Unresolved(reason)),
        };
        self.update_stats(StatsEvent::AnnouncesRewritten, 1);
        info!(
            "[PROXY] {peer} -> {} info_hash={} multiplier={} uploaded {} -> {}",
            announce.upstream,
            announce.swarm_id,
            announce.decision.multiplier,
            announce.original_uploaded.as_deref().unwrap_or("-"),
            announce.rewritten_uploaded.as_deref().unwrap_or("-")
        );

        let reply = match self.forwarder.forward(&announce.upstream, announce.request.as_bytes()).await {
            Ok(raw) => TrackerReply::new(raw),
            Err(error) => return Ok(HandleOutcome::ForwardFailed { upstream: announce.upstream, error }),
        };
        let swarm_updated = self.apply_reply(&announce.swarm_id, &reply);

        stream.write_all(reply.as_bytes()).await.map_err(ProxyError::ClientWrite)?;
        stream.flush().await.map_err(ProxyError::ClientWrite)?;
        Ok(HandleOutcome::Relayed {
            upstream: announce.upstream,
            bytes: reply.len(),
            swarm_updated,
        })
    }

    /// Records the seeder count carried by `reply`, if it has one. Returns
    /// whether the swarm state was touched.
    pub fn apply_reply(&self, swarm_id: &SwarmId, reply: &TrackerReply) -> bool
    {
        let value = match reply.decode() {
            Ok(value) => value,
            Err(error) => {
                self.update_stats(StatsEvent::DecodeFailures, 1);
                warn!("[PROXY] Reply for info_hash {swarm_id} is not bencoded ({error}), seed count unchanged");
                return false;
            }
        };
        let summary = match ReplySummary::from_value(&value) {
            Some(summary) => summary,
            None => {
                warn!("[PROXY] Reply for info_hash {swarm_id} is a {} rather than a dictionary, seed count unchanged", value.type_name());
                return false;
            }
        };
        if let Some(reason) = &summary.failure_reason {
            warn!("[PROXY] Tracker failure for info_hash {swarm_id}: {reason}");
        }
        self.swarms.set(swarm_id.clone(), summary.seeders());
        self.update_stats(StatsEvent::SwarmUpdates, 1);
        info!("[PROXY] Tracker response for info_hash {swarm_id}: {summary}");
        true
    }

    fn record_outcome(&self, peer: SocketAddr, outcome: &HandleOutcome)
    {
        match outcome {
            HandleOutcome::Empty => {
                debug!("[PROXY] {peer} closed without sending a request");
            }
            HandleOutcome::Ignored(reason) => {
                self.update_stats(StatsEvent::RequestsIgnored, 1);
                debug!("[PROXY] Not forwarding request from {peer}: {reason}");
            }
            HandleOutcome::Unresolved(reason) => {
                self.update_stats(StatsEvent::ResolveFailures, 1);
                error!("[PROXY] Dropping request from {peer}: {reason}");
            }
            HandleOutcome::ForwardFailed { upstream, error } => {
                self.update_stats(StatsEvent::ForwardFailures, 1);
                match error.is_timeout() {
                    true => warn!("[PROXY] No response from tracker {upstream}: {error}"),
                    false => error!("[PROXY] No response from tracker {upstream}: {error}"),
                }
            }
            HandleOutcome::Relayed { upstream, bytes, .. } => {
                self.update_stats(StatsEvent::RepliesRelayed, 1);
                debug!("[PROXY] Relayed {bytes} bytes from {upstream} to {peer}");
            }
        }
    }
}
