use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TcpForwarder {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}
