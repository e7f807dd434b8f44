use chrono::Timelike;

use crate::domain::calendar;
use crate::domain::weather::{ForecastBundle, Units, classify, is_daytime_hour, unit_symbol};

/// The hero card: big temperature, condition, observation timestamp.
#[must_use]
pub fn render(bundle: &ForecastBundle, units: Units) -> Vec<String> {
    let condition = classify(bundle.current.weather_code);
    let backdrop = if is_daytime_hour(bundle.current.time.hour()) {
        "day"
    } else {
        "night"
    };

    vec![
        format!(
            "{} {}{}  {}",
            condition.icon(),
            bundle.current_temp(units),
            unit_symbol(units),
            condition.label(),
        ),
        format!(
            "{} ({backdrop})",
            calendar::long_date(bundle.current.time)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::{CurrentObservation, parse_datetime};

    fn bundle(code: i32, hour: &str) -> ForecastBundle {
        ForecastBundle {
            current: CurrentObservation {
                temperature_c: 21.6,
                wind_speed_kmh: 9.5,
                wind_direction_deg: 200.0,
                weather_code: code,
                time: parse_datetime(hour).unwrap(),
            },
            hourly: Vec::new(),
            daily: Vec::new(),
        }
    }

    #[test]
    fn hero_card_shows_rounded_temp_and_condition() {
        let lines = render(&bundle(2, "2024-01-15T14:30"), Units::Celsius);
        assert_eq!(lines[0], "PSN 22°C  partly sunny");
        assert_eq!(lines[1], "Monday, January 15, 2024, 2:30 PM (day)");
    }

    #[test]
    fn hero_card_flips_to_night_backdrop() {
        let lines = render(&bundle(0, "2024-01-15T22:00"), Units::Fahrenheit);
        assert_eq!(lines[0], "SUN 71°F  sunny");
        assert!(lines[1].ends_with("(night)"));
    }
}
