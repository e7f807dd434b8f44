/// Normalized sky/precipitation category derived from a provider
/// weather code. A closed set: every code lands in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    PartlySunny,
    Cloudy,
    Rainy,
    Snowy,
    Thunderstorm,
}

/// Maps a weather code to its condition bucket.
///
/// Total over all of `i32`: codes outside the table (negative ones
/// included) fall back to `Cloudy` rather than failing.
#[must_use]
pub fn classify(code: i32) -> Condition {
    match code {
        0 => Condition::Sunny,
        1..=3 => Condition::PartlySunny,
        51..=57 | 61..=65 | 80..=82 => Condition::Rainy,
        66 | 67 | 71..=76 => Condition::Snowy,
        95 => Condition::Thunderstorm,
        _ => Condition::Cloudy,
    }
}

impl Condition {
    /// Human-readable form used on the forecast cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::PartlySunny => "partly sunny",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::Snowy => "snowy",
            Condition::Thunderstorm => "thunderstorm",
        }
    }

    /// Three-letter icon token for the plain-text widgets.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Condition::Sunny => "SUN",
            Condition::PartlySunny => "PSN",
            Condition::Cloudy => "CLD",
            Condition::Rainy => "RAN",
            Condition::Snowy => "SNW",
            Condition::Thunderstorm => "THN",
        }
    }
}

/// Daytime window used for background selection: 06:00 through 17:59.
#[must_use]
pub fn is_daytime_hour(hour: u32) -> bool {
    (6..18).contains(&hour)
}
