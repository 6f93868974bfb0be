use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::upload_format::UploadFormat;
use crate::config::structs::policy_config::PolicyConfig;

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            seeder_threshold: 5,
            multiplier_low: 3.0,
            multiplier_high: 1.5,
            suppress_download: false,
            pretend_fully_seeded: false,
            upload_format: UploadFormat::float,
        }
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, value) in [("multiplier_low", self.multiplier_low), ("multiplier_high", self.multiplier_high)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must be a finite, non-negative number, got {value}")));
            }
        }
        Ok(())
    }
}
