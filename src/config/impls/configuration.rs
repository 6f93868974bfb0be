use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::policy_config::PolicyConfig;
use crate::config::structs::proxy_config::ProxyConfig;
use crate::config::structs::sentry_config::SentryConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            proxy_config: ProxyConfig::default(),
            policy_config: PolicyConfig::default(),
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigurationError> {
        let data = toml::to_string(self).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, data)
    }

    /// Loads and validates the configuration at `path`.
    ///
    /// When the file is missing or unreadable and `create` is set, a default
    /// configuration is written to `path` and returned.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }

                eprintln!("Creating config file..");
                let config = Configuration::init();
                if let Err(error) = config.save_to_file(path) {
                    eprintln!("{path} file could not be created, check permissions...");
                    return Err(error);
                }
                config
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    /// Re-reads only the policy section from `path`.
    pub fn reload_policy(path: &str) -> Result<PolicyConfig, ConfigurationError> {
        let config = Configuration::load_file(path)?;
        config.policy_config.validate()?;
        Ok(config.policy_config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_value("log_level", &self.log_level, r"^(off|trace|debug|info|warn|error)$")?;
        self.proxy_config.validate()?;
        self.policy_config.validate()
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("{name} [:] Value: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigurationError> {
        self.proxy_config.bind_address.parse().map_err(|_| {
            ConfigurationError::ValidationError(format!("bind_address \"{}\" is not a socket address", self.proxy_config.bind_address))
        })
    }
}
