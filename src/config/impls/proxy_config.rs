use std::net::SocketAddr;
use std::time::Duration;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::proxy_config::ProxyConfig;

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            bind_address: String::from("127.0.0.1:8080"),
            backlog: 50,
            max_connections: 1024,
            read_buffer_size: 8192,
            upstream_connect_timeout: 10,
            upstream_read_timeout: 10,
        }
    }
}

impl ProxyConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_connect_timeout)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_read_timeout)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!("bind_address \"{}\" is not a socket address", self.bind_address)));
        }
        if self.backlog == 0 {
            return Err(ConfigurationError::ValidationError(String::from("backlog must be at least 1")));
        }
        if self.read_buffer_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("read_buffer_size must be at least 1")));
        }
        if self.upstream_connect_timeout == 0 || self.upstream_read_timeout == 0 {
            return Err(ConfigurationError::ValidationError(String::from("upstream timeouts must be at least 1 second")));
        }
        Ok(())
    }
}
