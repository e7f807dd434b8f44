use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::{
    CurrentObservation, DailyEntry, ForecastBundle, HourlyEntry, parse_date, parse_datetime,
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const HOURLY_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,windspeed_10m,weathercode,precipitation";
const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min,\
                            windspeed_10m_max,precipitation_sum,sunrise,sunset,uv_index_max";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// Fetches one forecast snapshot. Single try: a failure surfaces to
    /// the caller rather than triggering retries.
    pub async fn fetch(&self, latitude: f64, longitude: f64, days: u8) -> Result<ForecastBundle> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", days.to_string()),
            ])
            .send()
            .await
            .context("forecast request failed")?
            .error_for_status()
            .context("forecast request returned non-success status")?;

        let payload: ForecastResponse = response
            .json()
            .await
            .context("failed to parse forecast payload")?;

        bundle_from(payload)
    }
}

/// Turns the provider's parallel-array payload into typed records.
/// Index alignment is validated here, once; nothing downstream joins
/// arrays by index again.
fn bundle_from(payload: ForecastResponse) -> Result<ForecastBundle> {
    let hourly = zip_hourly(&payload.hourly)?;
    let daily = zip_daily(&payload.daily)?;

    let time = parse_datetime(&payload.current_weather.time).with_context(|| {
        format!(
            "unparseable current-weather timestamp {:?}",
            payload.current_weather.time
        )
    })?;

    Ok(ForecastBundle {
        current: CurrentObservation {
            temperature_c: payload.current_weather.temperature,
            wind_speed_kmh: payload.current_weather.windspeed,
            wind_direction_deg: payload.current_weather.winddirection,
            weather_code: payload.current_weather.weathercode,
            time,
        },
        hourly,
        daily,
    })
}

fn zip_hourly(block: &HourlyBlock) -> Result<Vec<HourlyEntry>> {
    let len = block.time.len();
    ensure_len("hourly.temperature_2m", block.temperature_2m.len(), len)?;
    ensure_len(
        "hourly.relative_humidity_2m",
        block.relative_humidity_2m.len(),
        len,
    )?;
    ensure_len("hourly.windspeed_10m", block.windspeed_10m.len(), len)?;
    ensure_len("hourly.weathercode", block.weathercode.len(), len)?;
    ensure_len("hourly.precipitation", block.precipitation.len(), len)?;

    let mut out = Vec::with_capacity(len);
    for idx in 0..len {
        let Some(time) = parse_datetime(&block.time[idx]) else {
            continue;
        };
        out.push(HourlyEntry {
            time,
            temperature_c: block.temperature_2m[idx],
            relative_humidity: block.relative_humidity_2m[idx],
            wind_speed_kmh: block.windspeed_10m[idx],
            weather_code: block.weathercode[idx],
            precipitation_mm: block.precipitation[idx],
        });
    }
    Ok(out)
}

fn zip_daily(block: &DailyBlock) -> Result<Vec<DailyEntry>> {
    let len = block.time.len();
    ensure_len("daily.weathercode", block.weathercode.len(), len)?;
    ensure_len(
        "daily.temperature_2m_max",
        block.temperature_2m_max.len(),
        len,
    )?;
    ensure_len(
        "daily.temperature_2m_min",
        block.temperature_2m_min.len(),
        len,
    )?;
    ensure_len("daily.windspeed_10m_max", block.windspeed_10m_max.len(), len)?;
    ensure_len("daily.precipitation_sum", block.precipitation_sum.len(), len)?;
    // Optional columns only have to line up when present.
    if !block.sunrise.is_empty() {
        ensure_len("daily.sunrise", block.sunrise.len(), len)?;
    }
    if !block.sunset.is_empty() {
        ensure_len("daily.sunset", block.sunset.len(), len)?;
    }
    if !block.uv_index_max.is_empty() {
        ensure_len("daily.uv_index_max", block.uv_index_max.len(), len)?;
    }

    let mut out = Vec::with_capacity(len);
    for idx in 0..len {
        let Some(date) = parse_date(&block.time[idx]) else {
            continue;
        };
        out.push(DailyEntry {
            date,
            weather_code: block.weathercode[idx],
            temperature_max_c: block.temperature_2m_max[idx],
            temperature_min_c: block.temperature_2m_min[idx],
            wind_speed_max_kmh: block.windspeed_10m_max[idx],
            precipitation_sum_mm: block.precipitation_sum[idx],
            sunrise: block.sunrise.get(idx).and_then(|v| parse_datetime(v)),
            sunset: block.sunset.get(idx).and_then(|v| parse_datetime(v)),
            uv_index_max: block.uv_index_max.get(idx).copied(),
        });
    }
    Ok(out)
}

fn ensure_len(field: &str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        bail!("{field} has {actual} entries, expected {expected}");
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeatherBlock,
    hourly: HourlyBlock,
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherBlock {
    temperature: f32,
    windspeed: f32,
    winddirection: f32,
    weathercode: i32,
    time: String,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<f32>,
    relative_humidity_2m: Vec<f32>,
    windspeed_10m: Vec<f32>,
    weathercode: Vec<i32>,
    precipitation: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    weathercode: Vec<i32>,
    temperature_2m_max: Vec<f32>,
    temperature_2m_min: Vec<f32>,
    windspeed_10m_max: Vec<f32>,
    precipitation_sum: Vec<f32>,
    #[serde(default)]
    sunrise: Vec<String>,
    #[serde(default)]
    sunset: Vec<String>,
    #[serde(default)]
    uv_index_max: Vec<f32>,
}
