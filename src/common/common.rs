use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter, SetLoggerError};
use crate::config::structs::configuration::Configuration;

/// Maps a configured level name onto a filter. Unknown names yield `None`.
pub fn log_level_filter(level: &str) -> Option<LevelFilter>
{
    match level {
        "off" => Some(LevelFilter::Off),
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None,
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), SetLoggerError>
{
    let level = log_level_filter(config.log_level.as_str()).unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}

/// Decodes request bytes as UTF-8, dropping every invalid sequence instead of
/// substituting a replacement character.
pub fn decode_request_text(mut input: &[u8]) -> String
{
    let mut output = String::with_capacity(input.len());
    loop {
        match std::str::from_utf8(input) {
            Ok(valid) => {
                output.push_str(valid);
                return output;
            }
            Err(error) => {
                let (valid, rest) = input.split_at(error.valid_up_to());
                output.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match error.error_len() {
                    Some(invalid) => input = &rest[invalid..],
                    None => return output,
                }
            }
        }
    }
}

