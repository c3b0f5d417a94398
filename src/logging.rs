//! Logger setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Default log configuration file, read from the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise log4rs from `file`, or log warnings to stderr when it is missing.
///
/// Log output never goes to stdout, which carries the table itself.
pub fn init_logging(file: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(file).exists() {
        log4rs::init_file(file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {file}: {e}"))?;
        log::debug!("Logging configured from {file}");
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::warn!("Log config {file} not found, logging warnings to stderr");
    Ok(())
}
