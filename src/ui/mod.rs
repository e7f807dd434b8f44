pub mod current;
pub mod forecast;
pub mod highlights;

use crate::domain::weather::{ForecastBundle, Units};

/// Renders the full dashboard as plain text lines: current conditions,
/// the forecast strip and daily list, then the highlight cards.
///
/// Every card derives its values from the bundle alone; the "now" each
/// derivation needs is the observation timestamp the provider reported,
/// never the wall clock.
#[must_use]
pub fn render(bundle: &ForecastBundle, units: Units, days: usize) -> Vec<String> {
    let mut lines = current::render(bundle, units);
    lines.push(String::new());
    lines.extend(forecast::render(bundle, days));
    lines.push(String::new());
    lines.extend(highlights::render(bundle));
    lines
}
