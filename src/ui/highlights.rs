use chrono::NaiveDateTime;

use crate::domain::arc::{self, ArcPoint};
use crate::domain::calendar::{clock_12h, clock_24h};
use crate::domain::dewpoint::dew_point;
use crate::domain::timeline::humidity_at;
use crate::domain::weather::{CurrentObservation, DailyEntry, ForecastBundle};

const METER_WIDTH: usize = 16;

const SUN_CANVAS_WIDTH: usize = 25;
const SUN_CANVAS_HEIGHT: usize = 6;

/// Highlight cards: wind, humidity + dew point, sunrise/sunset, UV.
/// A failed derivation costs its own card a placeholder line, nothing
/// more.
#[must_use]
pub fn render(bundle: &ForecastBundle) -> Vec<String> {
    let mut lines = vec!["Today's highlights".to_string()];
    lines.extend(wind_lines(&bundle.current));
    lines.push(String::new());
    lines.extend(humidity_lines(bundle));
    lines.push(String::new());
    lines.extend(sun_lines(bundle.today(), bundle.current.time));
    lines.push(String::new());
    lines.extend(uv_lines(bundle.today()));
    lines
}

/// Wind status: speed to one decimal plus the observation clock time.
fn wind_lines(current: &CurrentObservation) -> Vec<String> {
    vec![
        format!(
            "Wind   {} {:>5.1} km/h",
            speed_bars(current.wind_speed_kmh),
            current.wind_speed_kmh,
        ),
        format!("       as of {}", clock_12h(current.time)),
    ]
}

/// Humidity at the observation hour, and the dew point it implies.
fn humidity_lines(bundle: &ForecastBundle) -> Vec<String> {
    let humidity = match humidity_at(&bundle.hourly, bundle.current.time) {
        Ok(value) => value,
        Err(err) => return vec![format!("Humidity unavailable: {err}")],
    };

    let mut lines = vec![format!(
        "Humid  {} {:>4.0}%",
        meter(humidity / 100.0),
        humidity,
    )];
    match dew_point(bundle.current.temperature_c, humidity) {
        Ok(dp) => lines.push(format!("       dew point {dp:.2}°C right now")),
        Err(err) => lines.push(format!("       dew point unavailable: {err}")),
    }
    lines
}

/// Sunrise/sunset card: clock times plus the sun marker drawn on an
/// ASCII semicircle at its projected arc position.
fn sun_lines(today: Option<&DailyEntry>, now: NaiveDateTime) -> Vec<String> {
    let Some((sunrise, sunset)) = today.and_then(|day| day.sunrise.zip(day.sunset)) else {
        return vec!["Sun    no sunrise/sunset data".to_string()];
    };

    let progress = arc::sun_progress(sunrise, sunset, now);
    let mut lines = vec![format!(
        "Sun    rise {}  set {}",
        clock_24h(sunrise),
        clock_24h(sunset),
    )];
    lines.extend(sun_canvas(progress));
    lines
}

fn uv_lines(today: Option<&DailyEntry>) -> Vec<String> {
    let Some(uv) = today.and_then(|day| day.uv_index_max) else {
        return vec!["UV     no UV index data".to_string()];
    };
    vec![format!(
        "UV     {} {:>4.1} of 12",
        meter(arc::uv_progress(uv)),
        uv,
    )]
}

/// Draws the semicircle with a sun marker. Columns map onto the arc's
/// x span [0, 2r]; rows onto its height, top row = apex.
fn sun_canvas(progress: f32) -> Vec<String> {
    let width = SUN_CANVAS_WIDTH;
    let height = SUN_CANVAS_HEIGHT;
    let radius = (width as f32 - 1.0) / 2.0;

    let mut canvas = vec![vec![' '; width]; height];
    for col in 0..width {
        let row = arc_row(col as f32, radius, height);
        canvas[row][col] = '·';
    }

    let marker = arc::project(progress, radius);
    let col = (marker.x.round() as usize).min(width - 1);
    let row = point_row(marker, radius, height);
    canvas[row][col] = 'O';

    canvas
        .into_iter()
        .map(|row| {
            let line: String = row.into_iter().collect();
            format!("       {}", line.trim_end())
        })
        .collect()
}

/// Row of the arc outline at a given column.
fn arc_row(col: f32, radius: f32, height: usize) -> usize {
    let span = (radius * radius - (col - radius).powi(2)).max(0.0);
    point_row(
        ArcPoint {
            x: col,
            y: span.sqrt(),
        },
        radius,
        height,
    )
}

/// Scales a point's height above the baseline into a canvas row,
/// row 0 on top.
fn point_row(point: ArcPoint, radius: f32, height: usize) -> usize {
    let scaled = (point.y / radius * (height as f32 - 1.0)).round() as usize;
    (height - 1).saturating_sub(scaled.min(height - 1))
}

/// Filled progress meter.
fn meter(norm: f32) -> String {
    let fill = (norm.clamp(0.0, 1.0) * METER_WIDTH as f32).round() as usize;
    let mut bar = String::with_capacity(METER_WIDTH + 2);
    bar.push('[');
    for idx in 0..METER_WIDTH {
        bar.push(if idx < fill { '█' } else { '·' });
    }
    bar.push(']');
    bar
}

/// Wind bar row: bar `i` lights once the speed reaches `i + 1` km/h.
fn speed_bars(speed_kmh: f32) -> String {
    const BARS: usize = 13;
    (0..BARS)
        .map(|idx| {
            if speed_kmh >= (idx + 1) as f32 {
                '█'
            } else {
                '·'
            }
        })
        .collect()
}
