use async_trait::async_trait;
use crate::proxy::enums::forward_error::ForwardError;
use crate::proxy::structs::upstream::Upstream;

/// Sends one rewritten request to a tracker and returns its whole reply.
#[async_trait]
pub trait TrackerForwarder: Send + Sync {
    async fn forward(&self, upstream: &Upstream, request: &[u8]) -> Result<Vec<u8>, ForwardError>;
}
