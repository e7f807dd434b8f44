use std::f32::consts::PI;

use chrono::NaiveDateTime;

/// Full-scale UV index on the gauge.
const UV_GAUGE_MAX: f32 = 12.0;

/// A point on the semicircular gauge arc.
///
/// One convention for every arc in this crate: the baseline is y = 0
/// with y increasing upward, and x spans [0, 2·radius]. Progress 0 sits
/// at the right end of the baseline (2·radius, 0), progress 1 at the
/// left end (0, 0), and the apex (radius, radius) is reached at
/// progress 0.5. Renderers whose y axis points down flip y themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPoint {
    pub x: f32,
    pub y: f32,
}

/// Projects a progress fraction onto the arc. Out-of-range fractions
/// clamp to [0, 1] so the point never leaves the semicircle; non-finite
/// fractions are treated as 0.
#[must_use]
pub fn project(fraction: f32, radius: f32) -> ArcPoint {
    let fraction = if fraction.is_finite() { fraction } else { 0.0 };
    let angle = fraction.clamp(0.0, 1.0) * PI;
    ArcPoint {
        x: radius + radius * angle.cos(),
        y: radius * angle.sin(),
    }
}

/// Anchor points of the filled wedge for a progress gauge: the arc
/// start, the projected point, and that point's foot on the baseline.
/// The closing edge back to the start is the renderer's job.
#[must_use]
pub fn fill_wedge(fraction: f32, radius: f32) -> [ArcPoint; 3] {
    let tip = project(fraction, radius);
    [project(0.0, radius), tip, ArcPoint { x: tip.x, y: 0.0 }]
}

/// Fraction of daylight elapsed at `now`, clamped to [0, 1]. A window
/// where sunset does not come after sunrise collapses to 0.
#[must_use]
pub fn sun_progress(sunrise: NaiveDateTime, sunset: NaiveDateTime, now: NaiveDateTime) -> f32 {
    let total = (sunset - sunrise).num_seconds();
    if total <= 0 {
        return 0.0;
    }
    let elapsed = (now - sunrise).num_seconds();
    (elapsed as f32 / total as f32).clamp(0.0, 1.0)
}

/// UV index mapped onto the gauge scale, clamped to [0, 1].
#[must_use]
pub fn uv_progress(uv_index: f32) -> f32 {
    (uv_index / UV_GAUGE_MAX).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::parse_datetime;

    const EPS: f32 = 1e-3;

    fn assert_point(point: ArcPoint, x: f32, y: f32) {
        assert!((point.x - x).abs() < EPS, "x: got {}, want {x}", point.x);
        assert!((point.y - y).abs() < EPS, "y: got {}, want {y}", point.y);
    }

    #[test]
    fn arc_endpoints_sit_on_the_baseline() {
        assert_point(project(0.0, 100.0), 200.0, 0.0);
        assert_point(project(1.0, 100.0), 0.0, 0.0);
    }

    #[test]
    fn halfway_reaches_the_apex() {
        assert_point(project(0.5, 100.0), 100.0, 100.0);
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        assert_eq!(project(1.2, 100.0), project(1.0, 100.0));
        assert_eq!(project(-0.4, 100.0), project(0.0, 100.0));
        assert_eq!(project(f32::NAN, 100.0), project(0.0, 100.0));
    }

    #[test]
    fn wedge_foot_drops_straight_to_the_baseline() {
        let [start, tip, foot] = fill_wedge(0.25, 100.0);
        assert_point(start, 200.0, 0.0);
        assert!((foot.x - tip.x).abs() < EPS);
        assert!(foot.y.abs() < EPS);
        assert!(tip.y > 0.0);
    }

    #[test]
    fn sun_progress_tracks_the_daylight_window() {
        let sunrise = parse_datetime("2024-06-21T06:00").unwrap();
        let sunset = parse_datetime("2024-06-21T18:00").unwrap();
        let noon = parse_datetime("2024-06-21T12:00").unwrap();
        assert!((sun_progress(sunrise, sunset, noon) - 0.5).abs() < EPS);
        assert!((sun_progress(sunrise, sunset, sunrise)).abs() < EPS);
        assert!((sun_progress(sunrise, sunset, sunset) - 1.0).abs() < EPS);
    }

    #[test]
    fn sun_progress_clamps_outside_the_window() {
        let sunrise = parse_datetime("2024-06-21T06:00").unwrap();
        let sunset = parse_datetime("2024-06-21T18:00").unwrap();
        let before = parse_datetime("2024-06-21T04:00").unwrap();
        let after = parse_datetime("2024-06-21T23:00").unwrap();
        assert_eq!(sun_progress(sunrise, sunset, before), 0.0);
        assert_eq!(sun_progress(sunrise, sunset, after), 1.0);
        // Degenerate window: sunset before sunrise.
        assert_eq!(sun_progress(sunset, sunrise, before), 0.0);
    }

    #[test]
    fn uv_scale_tops_out_at_twelve() {
        assert!((uv_progress(6.0) - 0.5).abs() < EPS);
        assert_eq!(uv_progress(0.0), 0.0);
        assert_eq!(uv_progress(20.0), 1.0);
        assert_eq!(uv_progress(-3.0), 0.0);
    }
}
