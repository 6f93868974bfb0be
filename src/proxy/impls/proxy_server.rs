use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use log::{error, info};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use tokio::sync::{watch, OwnedSemaphorePermit, Semaphore};
use crate::proxy::structs::proxy_server::ProxyServer;
use crate::proxy::structs::proxy_state::ProxyState;

impl ProxyServer {
    #[tracing::instrument(level = "debug", skip(state))]
    pub async fn new(state: Arc<ProxyState>) -> io::Result<ProxyServer>
    {
        let proxy_config = &state.config.proxy_config;
        let bind_address: SocketAddr = proxy_config.bind_address.parse().map_err(io::Error::other)?;
        let domain = match bind_address {
            SocketAddr::V4(_) => Domain::IPV4,
            SocketAddr::V6(_) => Domain::IPV6,
        };

        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;
        socket.bind(&bind_address.into())?;
        socket.listen(proxy_config.backlog.min(i32::MAX as u32) as i32)?;
        socket.set_nonblocking(true)?;
        let listener = TcpListener::from_std(socket.into())?;

        let limiter = match proxy_config.max_connections {
            0 => None,
            limit => Some(Arc::new(Semaphore::new(limit.min(Semaphore::MAX_PERMITS)))),
        };

        Ok(ProxyServer {
            listener,
            state,
            limiter,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    /// Accepts connections until `rx` changes, handling each on its own task.
    /// With a connection limit, accepting waits while the limit is reached.
    pub async fn start(&self, mut rx: watch::Receiver<bool>)
    {
        let local = self.local_addr().map(|address| address.to_string()).unwrap_or_default();
        loop {
            let permit = tokio::select! {
                _ = rx.changed() => break,
                permit = Self::acquire(self.limiter.clone()) => permit,
            };
            tokio::select! {
                _ = rx.changed() => break,
                result = self.listener.accept() => match result {
                    Ok((stream, peer)) => {
                        let state = self.state.clone();
                        tokio::spawn(async move {
                            state.handle_connection(stream, peer).await;
                            drop(permit);
                        });
                    }
                    Err(error) => {
                        error!("[PROXY] Accepting connection on {local} failed: {error}");
                        tokio::time::sleep(Duration::from_millis(100)).await;
                    }
                }
            }
        }
        info!("[PROXY] Stopping listener on {local}...");
    }

    async fn acquire(limiter: Option<Arc<Semaphore>>) -> Option<OwnedSemaphorePermit>
    {
        match limiter {
            Some(limiter) => limiter.acquire_owned().await.ok(),
            None => None,
        }
    }
}
