use crate::utils::error::ConfigError;
use crate::utils::validation::{
    validate_date, validate_non_empty_string, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "geodesy-wfs")]
#[command(about = "Query geodesy station observations from a WFS endpoint")]
pub struct CliConfig {
    /// WFS endpoint URL; falls back to the config file when omitted
    #[arg(long)]
    pub service_url: Option<String>,

    /// Station to query, e.g. "parc"
    #[arg(long)]
    pub station_id: String,

    /// Inclusive range start, YYYY-MM-DD
    #[arg(long)]
    pub start_date: String,

    /// Inclusive range end, YYYY-MM-DD
    #[arg(long)]
    pub end_date: String,

    /// Optional TOML config file with endpoint defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.service_url {
            validate_url("service_url", url)?;
        }
        validate_non_empty_string("station_id", &self.station_id)?;
        validate_date("start_date", &self.start_date)?;
        validate_date("end_date", &self.end_date)?;
        Ok(())
    }
}
