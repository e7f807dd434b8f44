pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

use anyhow::Result;

use cli::Cli;
use data::forecast::ForecastClient;

/// Fetches one forecast snapshot and prints the rendered dashboard.
pub async fn run(cli: Cli) -> Result<()> {
    let client = match &cli.forecast_url {
        Some(url) => ForecastClient::with_base_url(url),
        None => ForecastClient::new(),
    };

    let bundle = client.fetch(cli.latitude, cli.longitude, cli.days).await?;
    for line in ui::render(&bundle, cli.units.into(), usize::from(cli.days)) {
        println!("{line}");
    }
    Ok(())
}
