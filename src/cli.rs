use clap::{Parser, ValueEnum};

use crate::domain::weather::Units;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitsArg> for Units {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Celsius => Units::Celsius,
            UnitsArg::Fahrenheit => Units::Fahrenheit,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(name = "skydash", version, about = "Weather dashboard for your terminal")]
pub struct Cli {
    /// Latitude of the location to report on
    #[arg(long, allow_hyphen_values = true, default_value_t = 52.03)]
    pub latitude: f64,

    /// Longitude of the location to report on
    #[arg(long, allow_hyphen_values = true, default_value_t = 5.17)]
    pub longitude: f64,

    /// Temperature units for the hero card
    #[arg(long, value_enum, default_value_t = UnitsArg::Celsius)]
    pub units: UnitsArg,

    /// Forecast length in days (7 or 14)
    #[arg(long, default_value = "7", value_parser = parse_days)]
    pub days: u8,

    /// Override the forecast API endpoint (used by tests)
    #[arg(long)]
    pub forecast_url: Option<String>,
}

fn parse_days(value: &str) -> Result<u8, String> {
    match value {
        "7" => Ok(7),
        "14" => Ok(14),
        _ => Err("forecast length must be 7 or 14 days".to_string()),
    }
}
