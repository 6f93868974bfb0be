/// Formatting applied to the rewritten upload counter.
pub mod upload_format;

/// Errors raised while reading or writing the configuration file.
pub mod configuration_error;
