pub mod configuration;
pub mod configuration_error;
pub mod policy_config;
pub mod proxy_config;
pub mod upload_format;
