use std::sync::atomic::{AtomicI64, Ordering};
use crate::proxy::structs::proxy_state::ProxyState;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl ProxyState {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            connections_handled: self.stats.connections_handled.load(Ordering::SeqCst),
            connections_active: self.stats.connections_active.load(Ordering::SeqCst),
            announces_rewritten: self.stats.announces_rewritten.load(Ordering::SeqCst),
            requests_ignored: self.stats.requests_ignored.load(Ordering::SeqCst),
            resolve_failures: self.stats.resolve_failures.load(Ordering::SeqCst),
            forward_failures: self.stats.forward_failures.load(Ordering::SeqCst),
            decode_failures: self.stats.decode_failures.load(Ordering::SeqCst),
            swarm_updates: self.stats.swarm_updates.load(Ordering::SeqCst),
            replies_relayed: self.stats.replies_relayed.load(Ordering::SeqCst),
            handler_errors: self.stats.handler_errors.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.stats_counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::ConnectionsHandled => &self.stats.connections_handled,
            StatsEvent::ConnectionsActive => &self.stats.connections_active,
            StatsEvent::AnnouncesRewritten => &self.stats.announces_rewritten,
            StatsEvent::RequestsIgnored => &self.stats.requests_ignored,
            StatsEvent::ResolveFailures => &self.stats.resolve_failures,
            StatsEvent::ForwardFailures => &self.stats.forward_failures,
            StatsEvent::DecodeFailures => &self.stats.decode_failures,
            StatsEvent::SwarmUpdates => &self.stats.swarm_updates,
            StatsEvent::RepliesRelayed => &self.stats.replies_relayed,
            StatsEvent::HandlerErrors => &self.stats.handler_errors,
        }
    }
}
