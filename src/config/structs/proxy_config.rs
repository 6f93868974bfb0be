use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProxyConfig {
    pub bind_address: String,
    pub backlog: u32,
    pub max_connections: usize,
    pub read_buffer_size: usize,
    pub upstream_connect_timeout: u64,
    pub upstream_read_timeout: u64,
}
