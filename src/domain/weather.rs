use chrono::{NaiveDate, NaiveDateTime};

pub mod conditions;

pub use conditions::{Condition, classify, is_daytime_hour};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

/// The `current_weather` block of a forecast fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentObservation {
    pub temperature_c: f32,
    pub wind_speed_kmh: f32,
    pub wind_direction_deg: f32,
    pub weather_code: i32,
    pub time: NaiveDateTime,
}

/// One hourly row, zipped out of the provider's parallel arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: NaiveDateTime,
    pub temperature_c: f32,
    pub relative_humidity: f32,
    pub wind_speed_kmh: f32,
    pub weather_code: i32,
    pub precipitation_mm: f32,
}

/// One daily row. Sunrise, sunset, and UV columns are optional in the
/// payload, so they stay optional here.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temperature_max_c: f32,
    pub temperature_min_c: f32,
    pub wind_speed_max_kmh: f32,
    pub precipitation_sum_mm: f32,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
    pub uv_index_max: Option<f32>,
}

/// A complete forecast snapshot. Derived values are recomputed from
/// scratch whenever a new bundle replaces this one.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBundle {
    pub current: CurrentObservation,
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
}

impl ForecastBundle {
    #[must_use]
    pub fn current_temp(&self, units: Units) -> i32 {
        round_temp(convert_temp(self.current.temperature_c, units))
    }

    #[must_use]
    pub fn today(&self) -> Option<&DailyEntry> {
        self.daily.first()
    }
}

#[must_use]
pub fn convert_temp(celsius: f32, units: Units) -> f32 {
    match units {
        Units::Celsius => celsius,
        Units::Fahrenheit => celsius * 1.8 + 32.0,
    }
}

#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn unit_symbol(units: Units) -> &'static str {
    match units {
        Units::Celsius => "°C",
        Units::Fahrenheit => "°F",
    }
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
