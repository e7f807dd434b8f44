use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::calendar::{day_label, short_date};
use crate::domain::error::MetricsError;
use crate::domain::weather::{
    Condition, CurrentObservation, DailyEntry, HourlyEntry, classify, round_temp,
};

/// One cell of the "Now + next hours" strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePoint {
    pub label: String,
    pub temperature: i32,
    pub condition: Condition,
}

/// One row of the daily forecast list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Midpoint of the day's max and min, rounded.
    pub temperature: i32,
    pub condition: Condition,
    pub short_date: String,
    pub day_name: String,
}

/// Index of the hourly record whose timestamp equals `time` exactly.
///
/// A missing hour is an error, not a window silently taken from the
/// start of the series.
pub fn find_hour(hourly: &[HourlyEntry], time: NaiveDateTime) -> Result<usize, MetricsError> {
    hourly
        .iter()
        .position(|entry| entry.time == time)
        .ok_or_else(|| MetricsError::HourNotFound(time.format("%Y-%m-%dT%H:%M").to_string()))
}

/// Relative humidity at the given hour, for the humidity card.
pub fn humidity_at(hourly: &[HourlyEntry], time: NaiveDateTime) -> Result<f32, MetricsError> {
    find_hour(hourly, time).map(|idx| hourly[idx].relative_humidity)
}

/// Builds the hourly strip: a "Now" cell from the current observation,
/// then up to `window` cells starting `offset_hours` past the current
/// hour. Runs shorter when the series ends early; never pads.
pub fn build_timeline(
    hourly: &[HourlyEntry],
    current: &CurrentObservation,
    offset_hours: usize,
    window: usize,
) -> Result<Vec<TimelinePoint>, MetricsError> {
    let start = find_hour(hourly, current.time)? + offset_hours;

    let mut points = Vec::with_capacity(window + 1);
    points.push(TimelinePoint {
        label: "Now".to_string(),
        temperature: round_temp(current.temperature_c),
        condition: classify(current.weather_code),
    });
    for entry in hourly.iter().skip(start).take(window) {
        points.push(TimelinePoint {
            label: entry.time.format("%H:%M").to_string(),
            temperature: round_temp(entry.temperature_c),
            condition: classify(entry.weather_code),
        });
    }
    Ok(points)
}

/// Projects the daily rows into display form, truncated to `days`.
/// Daily data is already one row per calendar day in order, so no
/// lookup step is needed.
#[must_use]
pub fn daily_overview(daily: &[DailyEntry], days: usize) -> Vec<DailyPoint> {
    daily
        .iter()
        .take(days)
        .enumerate()
        .map(|(index, day)| DailyPoint {
            date: day.date,
            temperature: round_temp((day.temperature_max_c + day.temperature_min_c) / 2.0),
            condition: classify(day.weather_code),
            short_date: short_date(day.date),
            day_name: day_label(day.date, index).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::{parse_date, parse_datetime};

    fn hourly_series(len: usize) -> Vec<HourlyEntry> {
        (0..len)
            .map(|hour| HourlyEntry {
                time: parse_datetime(&format!("2024-03-05T{hour:02}:00")).unwrap(),
                temperature_c: 10.0 + hour as f32,
                relative_humidity: 50.0 + hour as f32,
                wind_speed_kmh: 12.0,
                weather_code: if hour % 2 == 0 { 0 } else { 61 },
                precipitation_mm: 0.0,
            })
            .collect()
    }

    fn observation_at(hour: u32) -> CurrentObservation {
        CurrentObservation {
            temperature_c: 15.4,
            wind_speed_kmh: 9.0,
            wind_direction_deg: 180.0,
            weather_code: 2,
            time: parse_datetime(&format!("2024-03-05T{hour:02}:00")).unwrap(),
        }
    }

    #[test]
    fn window_starts_one_offset_past_the_current_hour() {
        let hourly = hourly_series(8);
        let points = build_timeline(&hourly, &observation_at(2), 1, 3).unwrap();

        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Now", "03:00", "04:00", "05:00"]);
        assert_eq!(points[0].temperature, 15);
        assert_eq!(points[0].condition, Condition::PartlySunny);
        assert_eq!(points[1].temperature, 13);
        assert_eq!(points[1].condition, Condition::Rainy);
        assert_eq!(points[3].temperature, 15);
    }

    #[test]
    fn window_truncates_when_the_series_ends_early() {
        let hourly = hourly_series(8);
        let points = build_timeline(&hourly, &observation_at(6), 1, 3).unwrap();

        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Now", "07:00"]);
    }

    #[test]
    fn window_past_the_end_leaves_only_the_now_cell() {
        let hourly = hourly_series(8);
        let points = build_timeline(&hourly, &observation_at(7), 2, 3).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "Now");
    }

    #[test]
    fn missing_current_hour_is_reported_not_defaulted() {
        let hourly = hourly_series(8);
        let mut current = observation_at(2);
        current.time = parse_datetime("2024-03-05T02:30").unwrap();

        assert_eq!(
            build_timeline(&hourly, &current, 1, 3),
            Err(MetricsError::HourNotFound("2024-03-05T02:30".to_string()))
        );
    }

    #[test]
    fn humidity_lookup_uses_the_exact_hour() {
        let hourly = hourly_series(8);
        let time = parse_datetime("2024-03-05T03:00").unwrap();
        assert_eq!(humidity_at(&hourly, time), Ok(53.0));

        let missing = parse_datetime("2024-03-06T03:00").unwrap();
        assert!(matches!(
            humidity_at(&hourly, missing),
            Err(MetricsError::HourNotFound(_))
        ));
    }

    #[test]
    fn daily_overview_averages_and_labels_rows() {
        let daily: Vec<DailyEntry> = (0..3)
            .map(|offset| DailyEntry {
                date: parse_date(&format!("2024-01-{:02}", 15 + offset)).unwrap(),
                weather_code: 61,
                temperature_max_c: 10.3,
                temperature_min_c: 5.2,
                wind_speed_max_kmh: 20.0,
                precipitation_sum_mm: 1.5,
                sunrise: None,
                sunset: None,
                uv_index_max: None,
            })
            .collect();

        let rows = daily_overview(&daily, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].temperature, 8); // (10.3 + 5.2) / 2 = 7.75
        assert_eq!(rows[0].condition, Condition::Rainy);
        assert_eq!(rows[0].short_date, "15 Jan");
        assert_eq!(rows[0].day_name, "Today");
        assert_eq!(rows[1].day_name, "Tuesday");
        assert_eq!(rows[1].short_date, "16 Jan");
    }

    #[test]
    fn daily_overview_of_an_empty_series_is_empty() {
        assert!(daily_overview(&[], 7).is_empty());
    }
}
