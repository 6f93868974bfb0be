use serde::{Deserialize, Serialize};
use crate::config::structs::policy_config::PolicyConfig;
use crate::config::structs::proxy_config::ProxyConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub proxy_config: ProxyConfig,
    pub policy_config: PolicyConfig,
    pub sentry_config: SentryConfig
}
