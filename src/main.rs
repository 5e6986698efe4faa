use std::time::Duration;

use clap::Parser;
use geodesy_wfs::utils::{logger, validation::Validate};
use geodesy_wfs::{
    CliConfig, GeodesyService, ReqwestServiceCaller, TomlConfig, WfsPostMethodMaker,
};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting geodesy-wfs");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    config.validate()?;

    let file_config = match &config.config {
        Some(path) => Some(TomlConfig::from_file(path)?),
        None => None,
    };

    let service_url = config
        .service_url
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.service.url.clone()))
        .ok_or_else(|| {
            anyhow::anyhow!("no service URL given (use --service-url or a config file)")
        })?;

    let timeout = file_config
        .as_ref()
        .and_then(|c| c.service.timeout_seconds)
        .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()?;

    let service = GeodesyService::new(ReqwestServiceCaller::new(client), WfsPostMethodMaker::new());

    let observations = service
        .observations_for_station(
            &service_url,
            &config.station_id,
            &config.start_date,
            &config.end_date,
        )
        .await?;

    tracing::info!(
        "retrieved {} observations for station {}",
        observations.len(),
        config.station_id
    );
    println!("{}", serde_json::to_string_pretty(&observations)?);

    Ok(())
}
