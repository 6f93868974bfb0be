use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use crate::config::structs::proxy_config::ProxyConfig;
use crate::proxy::enums::forward_error::ForwardError;
use crate::proxy::structs::tcp_forwarder::TcpForwarder;
use crate::proxy::structs::upstream::Upstream;
use crate::proxy::traits::tracker_forwarder::TrackerForwarder;

const READ_CHUNK_SIZE: usize = 8192;

impl TcpForwarder {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> TcpForwarder
    {
        TcpForwarder {
            connect_timeout,
            read_timeout,
        }
    }

    pub fn from_config(config: &ProxyConfig) -> TcpForwarder
    {
        TcpForwarder::new(config.connect_timeout(), config.read_timeout())
    }
}

#[async_trait]
impl TrackerForwarder for TcpForwarder {
    /// Opens a fresh connection, writes `request` and reads until the tracker
    /// closes its side. Each read is bounded by `read_timeout` on its own.
    #[tracing::instrument(level = "debug", skip(self, request))]
    async fn forward(&self, upstream: &Upstream, request: &[u8]) -> Result<Vec<u8>, ForwardError>
    {
        let address = upstream.to_string();
        let mut stream = match timeout(self.connect_timeout, TcpStream::connect((upstream.host.as_str(), upstream.port))).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => return Err(ForwardError::Connect { upstream: address, source }),
            Err(_) => return Err(ForwardError::ConnectTimeout(address)),
        };

        match timeout(self.read_timeout, stream.write_all(request)).await {
            Ok(Ok(())) => {}
            Ok(Err(source)) => return Err(ForwardError::Write { upstream: address, source }),
            Err(_) => return Err(ForwardError::ReplyTimeout(address)),
        }

        let mut reply = Vec::new();
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            match timeout(self.read_timeout, stream.read(&mut chunk)).await {
                Ok(Ok(0)) => break,
                Ok(Ok(read)) => reply.extend_from_slice(&chunk[..read]),
                Ok(Err(source)) => return Err(ForwardError::Read { upstream: address, source }),
                Err(_) => return Err(ForwardError::ReplyTimeout(address)),
            }
        }

        debug!("[FORWARD] Received {} bytes from {}", reply.len(), address);
        if reply.is_empty() {
            return Err(ForwardError::EmptyReply(address));
        }
        Ok(reply)
    }
}
