use crate::domain::timeline::{TimelinePoint, build_timeline, daily_overview};
use crate::domain::weather::ForecastBundle;

/// The hourly strip looks one hour past the matched "now" entry and
/// carries up to a day of cells; only the first eight are displayed.
const STRIP_OFFSET_HOURS: usize = 1;
const STRIP_WINDOW: usize = 23;
const STRIP_DISPLAY: usize = 8;

const CELL_WIDTH: usize = 7;

/// Forecast panel: the "Now + next hours" strip and the daily rows.
#[must_use]
pub fn render(bundle: &ForecastBundle, days: usize) -> Vec<String> {
    let mut lines = vec![format!("{days} day forecast")];

    match build_timeline(
        &bundle.hourly,
        &bundle.current,
        STRIP_OFFSET_HOURS,
        STRIP_WINDOW,
    ) {
        Ok(points) => lines.extend(strip_rows(&points)),
        Err(err) => lines.push(format!("hourly strip unavailable: {err}")),
    }

    lines.push(String::new());
    for row in daily_overview(&bundle.daily, days) {
        lines.push(format!(
            "{} {:>3}°C  {:<13} {:<7} {}",
            row.condition.icon(),
            row.temperature,
            row.condition.label(),
            row.short_date,
            row.day_name,
        ));
    }
    lines
}

/// Three aligned rows per strip: labels, icons, temperatures.
fn strip_rows(points: &[TimelinePoint]) -> Vec<String> {
    let shown = &points[..points.len().min(STRIP_DISPLAY)];
    let mut labels = String::new();
    let mut icons = String::new();
    let mut temps = String::new();
    for point in shown {
        labels.push_str(&format!("{:<width$}", point.label, width = CELL_WIDTH));
        icons.push_str(&format!("{:<width$}", point.condition.icon(), width = CELL_WIDTH));
        temps.push_str(&format!(
            "{:<width$}",
            format!("{}°C", point.temperature),
            width = CELL_WIDTH
        ));
    }
    vec![
        labels.trim_end().to_string(),
        icons.trim_end().to_string(),
        temps.trim_end().to_string(),
    ]
}
