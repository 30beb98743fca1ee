use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;
pub use log::LevelFilter;

use crate::error::*;

// ISO 8601 timestamp and color coded level tag
const DEFAULT_LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

/// Logger configuration: everything goes to stderr so stdout only carries results
pub fn log_config(level: LevelFilter) -> SirResult<Config>
{
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| SirError::Logging(e.to_string()))
}

/// Install the global logger. Can only succeed once per process.
pub fn init_logging(level: LevelFilter) -> SirResult<()>
{
    let config = log_config(level)?;
    log4rs::init_config(config)
        .map_err(|e| SirError::Logging(e.to_string()))?;
    Ok(())
}
