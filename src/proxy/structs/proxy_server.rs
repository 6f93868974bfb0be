use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use crate::proxy::structs::proxy_state::ProxyState;

pub struct ProxyServer {
    pub(crate) listener: TcpListener,
    pub(crate) state: Arc<ProxyState>,
    /// `None` when `max_connections` is 0.
    pub(crate) limiter: Option<Arc<Semaphore>>,
}
