//! Runtime settings for the `subnet-mask-table` binary.
//!
//! Values come from the environment (a `.env` file is loaded by `main`):
//! - `SUBNET_MASKS_FORMAT` - `terminal` (default), `csv` or `json`
//! - `SUBNET_MASKS_MIN_CIDR` / `SUBNET_MASKS_MAX_CIDR` - range of prefixes to print

use crate::models::MAX_LENGTH;
use std::error::Error;
use std::str::FromStr;

pub const ENV_FORMAT: &str = "SUBNET_MASKS_FORMAT";
pub const ENV_MIN_CIDR: &str = "SUBNET_MASKS_MIN_CIDR";
pub const ENV_MAX_CIDR: &str = "SUBNET_MASKS_MAX_CIDR";

/// How the table is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "" => Ok(OutputFormat::Terminal),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}'").into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub min_cidr: u8,
    pub max_cidr: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Terminal,
            min_cidr: 0,
            max_cidr: MAX_LENGTH,
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format
                .parse::<OutputFormat>()
                .map_err(|e| format!("{ENV_FORMAT}: {e}"))?;
        }
        if let Some(min) = lookup(ENV_MIN_CIDR) {
            config.min_cidr = parse_cidr(ENV_MIN_CIDR, &min)?;
        }
        if let Some(max) = lookup(ENV_MAX_CIDR) {
            config.max_cidr = parse_cidr(ENV_MAX_CIDR, &max)?;
        }
        if config.min_cidr > config.max_cidr {
            return Err(format!(
                "{ENV_MIN_CIDR}={} is larger than {ENV_MAX_CIDR}={}",
                config.min_cidr, config.max_cidr
            )
            .into());
        }
        log::debug!("Config loaded: {:?}", config);
        Ok(config)
    }

    /// True when `cidr` is inside the configured range.
    pub fn includes(&self, cidr: u8) -> bool {
        (self.min_cidr..=self.max_cidr).contains(&cidr)
    }
}

fn parse_cidr(key: &str, value: &str) -> Result<u8, Box<dyn Error>> {
    let cidr: u8 = value
        .trim()
        .parse()
        .map_err(|_| format!("{key}: invalid prefix length '{value}'"))?;
    if cidr > MAX_LENGTH {
        return Err(format!("{key}: Network length is too long ({cidr})").into());
    }
    Ok(cidr)
}
